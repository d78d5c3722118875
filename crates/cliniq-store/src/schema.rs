use tantivy::schema::{self, FAST, INDEXED, STORED, STRING, Schema, TEXT};

/// Field names used in the Tantivy index.
pub mod field {
    pub const ID: &str = "id";
    pub const SEX: &str = "sex";
    pub const AGE: &str = "age";
    pub const TEXT: &str = "text";
    pub const DATED_ENTRIES: &str = "dated_entries";
}

/// Build the Tantivy schema for clinical documents.
pub fn build_schema() -> Schema {
    let mut builder = Schema::builder();

    // Document id, fast for ordering results
    builder.add_u64_field(field::ID, INDEXED | STORED | FAST);

    // Sex as an exact string for equality filtering
    builder.add_text_field(field::SEX, STRING | STORED);

    // Age as i64, indexed for range queries
    builder.add_i64_field(field::AGE, INDEXED | STORED | FAST);

    builder.add_text_field(field::TEXT, TEXT | STORED);

    // Timeline serialized as a JSON array, stored only
    builder.add_text_field(field::DATED_ENTRIES, STORED);

    builder.build()
}

/// Resolve a field by name from the schema, returning the Tantivy `Field` handle.
///
/// # Panics
///
/// Panics if the field name does not exist in the schema. This is only called
/// with the constants in [`field`], so a panic indicates a schema definition bug.
pub fn get_field(schema: &Schema, name: &str) -> schema::Field {
    schema
        .get_field(name)
        .unwrap_or_else(|_| panic!("field '{name}' not found in schema"))
}
