use crate::shared::*;

/// The species a catch can turn out to be. Every species is equally likely;
/// the rolled sell value, not the species, is what varies a catch's worth.
pub fn populate_fish(table: &mut FishTable) {
    table.species = vec![
        "Bass".into(),
        "Carp".into(),
        "Trout".into(),
        "Salmon".into(),
        "Tuna".into(),
    ];
}
