pub struct Icons;

impl Icons {
    pub const BOOK: &str = "📖";
    pub const SEARCH: &str = "🔍";
    pub const CROSS: &str = "✗";
    pub const WARN: &str = "⚠️";
    pub const INFO: &str = "ℹ️";
    pub const STATS: &str = "📊";
    pub const LINK: &str = "🔗";
    pub const UP: &str = "⬆️";
    pub const DATABASE: &str = "🗄️";
    pub const CLOCK: &str = "⏱️";
    pub const EMPTY: &str = "∅";
}
