use tantivy::schema::{self, Schema, STORED, STRING, TEXT};

/// Field names used in the knowledge-base Tantivy index.
pub mod field {
    pub const ID: &str = "id";
    pub const TITLE: &str = "title";
    pub const BODY: &str = "body";
}

/// Build the Tantivy schema used by the knowledge-base index.
pub fn build_schema() -> Schema {
    let mut builder = Schema::builder();

    // Identifier — stored and indexed as an exact string
    builder.add_text_field(field::ID, STRING | STORED);

    // Full-text searchable fields; body is stored so the best-matching
    // passage can be returned verbatim
    builder.add_text_field(field::TITLE, TEXT | STORED);
    builder.add_text_field(field::BODY, TEXT | STORED);

    builder.build()
}

/// Resolve a field by name from the schema, returning the Tantivy `Field` handle.
///
/// # Panics
///
/// Panics if the field name does not exist in the schema. This is only called
/// with compile-time field name constants, so a panic indicates a schema
/// definition bug.
pub fn get_field(schema: &Schema, name: &str) -> schema::Field {
    schema
        .get_field(name)
        .unwrap_or_else(|_| panic!("field '{name}' not found in schema"))
}
