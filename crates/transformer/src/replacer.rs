use serde_json::Value;

use ldm_core::{
    is_array_reference_field, is_excluded, is_id_field, is_name_field, is_single_reference_field,
    RenameContext, ID_FIELD,
};

/// Pass 2: walks the document again and substitutes every recognized
/// identifier occurrence from the completed table. Pure substitution —
/// a string without a table entry is left alone, and nothing is ever
/// allocated here.
#[derive(Debug)]
pub struct IdentReplacer<'a> {
    ctx: &'a RenameContext,
}

impl<'a> IdentReplacer<'a> {
    pub fn new(ctx: &'a RenameContext) -> Self {
        Self { ctx }
    }

    fn substitute(&self, s: &mut String) {
        if let Some(alias) = self.ctx.get(s) {
            *s = alias.clone();
        }
    }

    pub fn rewrite(&self, node: &mut Value) {
        match node {
            Value::Object(map) => {
                // objects under the reserved namespace keep their
                // human-readable name
                let keeps_name = map
                    .get(ID_FIELD)
                    .and_then(Value::as_str)
                    .is_some_and(is_excluded);

                for (key, value) in map.iter_mut() {
                    match value {
                        Value::String(s) if is_name_field(key) => {
                            if !keeps_name {
                                self.substitute(s);
                            }
                        }
                        Value::String(s)
                            if is_id_field(key) || is_single_reference_field(key) =>
                        {
                            self.substitute(s);
                        }
                        Value::Array(items) if is_array_reference_field(key) => {
                            for item in items {
                                if let Value::String(s) = item {
                                    self.substitute(s);
                                }
                            }
                        }
                        Value::Object(_) | Value::Array(_) => self.rewrite(value),
                        _ => {}
                    }
                }
            }
            Value::Array(items) => {
                for item in items {
                    self.rewrite(item);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::collector::IdentCollector;

    use super::*;

    fn run(doc: &mut Value) -> RenameContext {
        let mut ctx = RenameContext::new();
        IdentCollector::new(&mut ctx).collect(doc);
        IdentReplacer::new(&ctx).rewrite(doc);
        ctx
    }

    #[test]
    fn references_follow_the_identity_alias() {
        let mut doc = json!({
            "Areas": [ { "id": "HQ_Area_US" } ],
            "HQs": [
                { "id": "TEAM_1_HQ", "HQArea": "HQ_Area_US" }
            ],
            "Order": { "CapturePoints": ["TEAM_1_HQ", "HQ_Area_US"] }
        });

        run(&mut doc);

        assert_eq!(doc["Areas"][0]["id"], "a");
        assert_eq!(doc["HQs"][0]["id"], "b");
        assert_eq!(doc["HQs"][0]["HQArea"], "a");
        assert_eq!(doc["Order"]["CapturePoints"], json!(["b", "a"]));
    }

    #[test]
    fn unknown_references_stay_unchanged() {
        let mut doc = json!({ "HQArea": "NeverDeclared", "SpawnPoints": ["Ghost", 3] });

        run(&mut doc);

        assert_eq!(doc["HQArea"], "NeverDeclared");
        assert_eq!(doc["SpawnPoints"], json!(["Ghost", 3]));
    }

    #[test]
    fn static_object_keeps_its_name() {
        let mut doc = json!([
            { "id": "Static/Crane_01", "name": "Crane" },
            { "id": "Crane" }
        ]);

        run(&mut doc);

        // the second object's id "Crane" is aliased, but the protected
        // object's name survives even though the strings collide
        assert_eq!(doc[0]["id"], "Static/Crane_01");
        assert_eq!(doc[0]["name"], "Crane");
        assert_ne!(doc[1]["id"], "Crane");
    }

    #[test]
    fn hierarchical_id_is_rewritten_as_a_whole() {
        let mut doc = json!({
            "id": "TEAM_1_HQ/SpawnPoint_1_1",
            "Nested": { "InfantrySpawns": ["TEAM_1_HQ/SpawnPoint_1_1"] }
        });

        run(&mut doc);

        assert_eq!(doc["id"], "a/b");
        assert_eq!(doc["Nested"]["InfantrySpawns"][0], "a/b");
    }

    #[test]
    fn non_reference_strings_are_untouched() {
        let mut doc = json!({
            "id": "Objective_A",
            "description": "Objective_A is the north objective"
        });

        run(&mut doc);

        assert_eq!(doc["id"], "a");
        assert_eq!(doc["description"], "Objective_A is the north objective");
    }
}
