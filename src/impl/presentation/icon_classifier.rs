/// Shown for anything the dictionary does not know.
pub const UNCLASSIFIED_ICON: &str = "📦";

/// Item names (English and Urdu) to icons. Substring matching walks this in
/// declaration order and the first hit wins, so keep more specific keys above
/// keys they contain.
const ICONS: &[(&str, &str)] = &[
    // Vegetables.
    ("tomato", "🍅"),
    ("tamatar", "🍅"),
    ("potato", "🥔"),
    ("aalu", "🥔"),
    ("aloo", "🥔"),
    ("onion", "🧅"),
    ("pyaz", "🧅"),
    ("garlic", "🧄"),
    ("lehsan", "🧄"),
    ("ginger", "🫚"),
    ("adrak", "🫚"),
    ("carrot", "🥕"),
    ("gajar", "🥕"),
    ("corn", "🌽"),
    ("makai", "🌽"),
    ("cucumber", "🥒"),
    ("kheera", "🥒"),
    ("eggplant", "🍆"),
    ("baingan", "🍆"),
    ("chili", "🌶️"),
    ("mirch", "🌶️"),
    ("capsicum", "🫑"),
    ("shimla", "🫑"),
    ("mushroom", "🍄"),
    ("broccoli", "🥦"),
    ("leafy", "🥬"),
    ("saag", "🥬"),
    ("palak", "🥬"),
    // Fruit.
    ("apple", "🍎"),
    ("banana", "🍌"),
    ("grapes", "🍇"),
    ("mango", "🥭"),
    ("lemon", "🍋"),
    ("nimbu", "🍋"),
    // Staples.
    ("rice", "🍚"),
    ("chawal", "🍚"),
    ("wheat", "🌾"),
    ("gandum", "🌾"),
];

/// Icon for a free-text item name. Never fails: unknown names get
/// [`UNCLASSIFIED_ICON`].
pub fn classify(name: &str) -> &'static str {
    let name = name.trim().to_lowercase();
    if let Some((_, icon)) = ICONS.iter().find(|(key, _)| *key == name) {
        return *icon;
    }
    ICONS
        .iter()
        .find(|(key, _)| name.contains(key))
        .map(|(_, icon)| *icon)
        .unwrap_or(UNCLASSIFIED_ICON)
}
