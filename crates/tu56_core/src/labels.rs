use std::borrow::Cow;

/// Built-in place names, one per tape block.
pub const PLACES: [&str; 64] = [
    "The Ancient Harbor",
    "Misty Moorlands",
    "Crystal Caverns",
    "Abandoned Observatory",
    "Whispering Woods",
    "Forgotten Temple",
    "Floating Islands",
    "Underground Lake",
    "Storm Peak Summit",
    "Desert Oasis",
    "Frozen Tundra",
    "Volcanic Forge",
    "Sunken City Ruins",
    "Enchanted Garden",
    "Shadow Valley",
    "Celestial Tower",
    "Deep Forest Glade",
    "Rocky Cliffs",
    "Merchant's Bazaar",
    "Hidden Sanctuary",
    "The Great Library",
    "Moonlit Beach",
    "Mountain Pass",
    "Old Mill",
    "Dragon's Lair",
    "Sacred Grove",
    "Windswept Plains",
    "Coral Reef",
    "Ice Palace",
    "Ruins of Atlantis",
    "Mystic Falls",
    "Bone Yard",
    "Golden Fields",
    "Dark Abyss",
    "Sky Bridge",
    "Emerald Mines",
    "Ghost Town",
    "Serpent's Nest",
    "Lighthouse Point",
    "Canyon Echo",
    "Wizard's Tower",
    "Fishing Village",
    "Jungle Canopy",
    "Stone Circle",
    "Pirate Cove",
    "Silver Lake",
    "Thunder Mountain",
    "Silk Road Outpost",
    "Swamp of Sorrows",
    "Paradise Valley",
    "Fortress Ruins",
    "Starlight Plateau",
    "Burning Sands",
    "River Crossing",
    "Cloud City",
    "Haunted Mansion",
    "Pearl Lagoon",
    "Amber Forest",
    "The Crossroads",
    "Sapphire Grotto",
    "Eternal Spring",
    "Ravens Nest",
    "The Lost Garden",
    "Iron Gate Keep",
];

/// Read-only label source handed to the image writer.
#[derive(Debug, Clone, Copy)]
pub struct LabelTable<'a> {
    entries: &'a [&'a str],
}

impl<'a> LabelTable<'a> {
    pub fn new(entries: &'a [&'a str]) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Label for block `index`; past the end of the table a name is synthesized.
    pub fn label(&self, index: usize) -> Cow<'a, str> {
        match self.entries.get(index) {
            Some(s) => Cow::Borrowed(*s),
            None => Cow::Owned(format!("Location {index}")),
        }
    }

    /// First `n` table entries with their block indices (fallbacks excluded).
    pub fn preview(&self, n: usize) -> impl Iterator<Item = (usize, &'a str)> + 'a {
        let entries = self.entries;
        entries.iter().copied().take(n).enumerate()
    }
}

impl Default for LabelTable<'static> {
    fn default() -> Self {
        Self::new(&PLACES)
    }
}
