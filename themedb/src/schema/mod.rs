mod infer;
mod parser;
mod types;

pub use infer::{generate_schema, infer_type};
pub use parser::{parse_schema, parse_schema_str, write_schema};
pub use types::{Schema, TypeTag};
