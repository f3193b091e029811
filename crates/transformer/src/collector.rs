use serde_json::Value;

use ldm_core::{is_id_field, is_name_field, RenameContext};

/// Pass 1: walks the document depth-first in native key order and fills
/// the alias table. Allocation order, and therefore which token each
/// identifier receives, follows first discovery.
#[derive(Debug)]
pub struct IdentCollector<'a> {
    ctx: &'a mut RenameContext,
}

impl<'a> IdentCollector<'a> {
    pub fn new(ctx: &'a mut RenameContext) -> Self {
        Self { ctx }
    }

    pub fn collect(&mut self, node: &Value) {
        match node {
            Value::Object(map) => {
                for (key, value) in map {
                    if let Value::String(s) = value {
                        if is_name_field(key) {
                            self.ctx.allocate_or_get(s);
                        } else if is_id_field(key) {
                            self.ctx.allocate_id(s);
                        }
                    }

                    self.collect(value);
                }
            }
            Value::Array(items) => {
                for item in items {
                    self.collect(item);
                }
            }
            // scalars terminate the walk
            _ => {}
        }
    }
}
