use lazy_static::lazy_static;
use rustc_hash::FxHashSet;

/// Delimiter between the parts of a hierarchical identifier.
pub const PATH_SEPARATOR: char = '/';

/// Identity field holding an object's own display name.
pub const NAME_FIELD: &str = "name";
/// Identity field holding an object's own (possibly hierarchical) id.
pub const ID_FIELD: &str = "id";

// The reference taxonomy is fixed domain knowledge, not inferred from the
// document: these field names are known to hold ids of other objects.
lazy_static! {
    static ref SINGLE_REFERENCE_FIELDS: FxHashSet<&'static str> = FxHashSet::from_iter([
        "HQArea",
        "CombatVolume",
        "CaptureArea",
        "Area",
        "SurroundingCombatArea",
        "ExclusionAreaTeam1",
        "ExclusionAreaTeam2",
        "ExclusionAreaTeam1_OBB",
        "ExclusionAreaTeam2_OBB",
        "DestructionArea",
        "MapDetailRenderArea",
        "SectorArea",
        "RetreatArea",
        "RetreatFromArea",
        "AdvanceFromArea",
        "AdvanceToArea",
    ]);
    static ref ARRAY_REFERENCE_FIELDS: FxHashSet<&'static str> = FxHashSet::from_iter([
        "InfantrySpawns",
        "ForwardSpawns",
        "InfantrySpawnPoints_Team1",
        "InfantrySpawnPoints_Team2",
        "SpawnPoints",
        "CapturePoints",
        "MCOMs",
    ]);
}

pub fn is_name_field(key: &str) -> bool {
    key == NAME_FIELD
}

pub fn is_id_field(key: &str) -> bool {
    key == ID_FIELD
}

pub fn is_identity_field(key: &str) -> bool {
    is_name_field(key) || is_id_field(key)
}

/// Field whose string value is the id of one other object.
pub fn is_single_reference_field(key: &str) -> bool {
    SINGLE_REFERENCE_FIELDS.contains(key)
}

/// Field whose array value is a list of ids of other objects.
pub fn is_array_reference_field(key: &str) -> bool {
    ARRAY_REFERENCE_FIELDS.contains(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxonomy() {
        assert!(is_identity_field("name"));
        assert!(is_identity_field("id"));
        assert!(!is_identity_field("Name"));

        assert!(is_single_reference_field("HQArea"));
        assert!(is_single_reference_field("AdvanceToArea"));
        assert!(!is_single_reference_field("SpawnPoints"));

        assert!(is_array_reference_field("SpawnPoints"));
        assert!(is_array_reference_field("MCOMs"));
        assert!(!is_array_reference_field("HQArea"));
    }
}
