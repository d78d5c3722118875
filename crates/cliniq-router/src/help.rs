/// Static reply to a help request.
pub const USAGE: &str = "usage:

- You can ask me to predict results by keyword:
e.g., \"Tell me what would happen as result, the keyword is cancer\"

- You can ask me to render a graph or table for term frequency analysis:
e.g., \"Term frequency table where x is date, for male, age from 60 to 70. Keyword is PO\"
e.g., \"Term frequency line graph where x is date, female, age 60 to 70\"
e.g., \"Term frequency bar graph, group by gender, keyword is aortic\"
e.g., \"Term frequency pie chart, age between 50 to 60\"
";
