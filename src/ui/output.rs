use crate::relation::Relation;
use crate::sinset::Sinset;
use crate::ui::{theme, Icons};
use owo_colors::OwoColorize;
use std::sync::OnceLock;

static QUIET: OnceLock<bool> = OnceLock::new();

/// Set from `--quiet`; must run before anything is printed
pub fn init_quiet(quiet: bool) {
    let _ = QUIET.set(quiet || quiet_from_env());
}

/// Suppress banners and info lines (`--quiet` or `RUTEZ_QUIET=1`)
pub fn is_quiet() -> bool {
    *QUIET.get_or_init(quiet_from_env)
}

fn quiet_from_env() -> bool {
    std::env::var_os("RUTEZ_QUIET")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

pub fn header(text: &str) {
    if is_quiet() {
        return;
    }
    println!("{} {}", Icons::BOOK, text.style(theme().title));
}

pub fn render_error(label: &str) -> String {
    format!("{} {}", Icons::CROSS, label.style(theme().error))
}

/// Fatal error line on stderr
pub fn error(label: &str) {
    eprintln!("{}", render_error(label));
}

pub fn warn(label: &str) {
    eprintln!("{} {}", Icons::WARN, label.style(theme().warn));
}

pub fn info(label: &str, value: &str) {
    if is_quiet() {
        return;
    }
    println!("{} {}: {}", Icons::INFO, label.style(theme().muted), value);
}

/// Top-level line for a resolved sinset
pub fn concept(sinset: &Sinset) {
    println!("{} {}", sinset.id.style(theme().id), sinset.name.style(theme().concept));
}

/// `{id:>5} {name}` at the given indent
pub fn render_sinset_line(indent: usize, sinset: &Sinset) -> String {
    let id = format!("{:>5}", sinset.id);
    format!("{:indent$}{} {}", "", id.style(theme().id), sinset.name, indent = indent)
}

pub fn sinset_line(indent: usize, sinset: &Sinset) {
    println!("{}", render_sinset_line(indent, sinset));
}

pub fn relation_line(indent: usize, relation: &Relation) {
    let id = format!("{:>5}", relation.target.id);
    let label = match relation.kind() {
        Some(kind) => format!("{} ({})", relation.label, kind),
        None => relation.label.clone(),
    };
    println!(
        "{:indent$}{} {}  {}",
        "",
        id.style(theme().id),
        relation.target.name,
        label.style(theme().label),
        indent = indent
    );
}

fn render_empty(indent: usize) -> String {
    format!("{:indent$}{}", "", Icons::EMPTY.style(theme().muted), indent = indent)
}

pub fn empty(indent: usize) {
    println!("{}", render_empty(indent));
}

/// Section title, e.g. `  hyperonyms:`, then one line per sinset
pub fn render_listing(indent: usize, title: &str, sinsets: &[Sinset]) -> String {
    let mut lines = vec![format!("{:indent$}{}:", "", title.style(theme().title), indent = indent)];
    if sinsets.is_empty() {
        lines.push(render_empty(indent + 4));
    }
    lines.extend(sinsets.iter().map(|sinset| render_sinset_line(indent + 2, sinset)));
    lines.join("\n")
}

pub fn listing(indent: usize, title: &str, sinsets: &[Sinset]) {
    println!("{}", render_listing(indent, title, sinsets));
}

pub fn timing(elapsed: &str) {
    eprintln!("{} {}", Icons::CLOCK, elapsed.style(theme().muted));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(rendered: String) -> String {
        console::strip_ansi_codes(&rendered).into_owned()
    }

    #[test]
    fn test_sinset_line_right_aligns_id() {
        assert_eq!(plain(render_sinset_line(0, &Sinset::new(42, "ЖИВОЕ"))), "   42 ЖИВОЕ");
        assert_eq!(plain(render_sinset_line(2, &Sinset::new(42, "ЖИВОЕ"))), "     42 ЖИВОЕ");
    }

    #[test]
    fn test_wide_id_is_not_truncated() {
        let sinset = Sinset::new(106944, "ПОСТОЯННАЯ СУЩНОСТЬ");
        assert_eq!(plain(render_sinset_line(2, &sinset)), "  106944 ПОСТОЯННАЯ СУЩНОСТЬ");
    }

    #[test]
    fn test_listing_layout() {
        let sinsets = [Sinset::new(2, "ЧЕЛОВЕК"), Sinset::new(1, "ЖИВОЕ")];
        assert_eq!(
            plain(render_listing(2, "all hyperonyms", &sinsets)),
            "  all hyperonyms:\n        2 ЧЕЛОВЕК\n        1 ЖИВОЕ"
        );
    }

    #[test]
    fn test_empty_listing_shows_marker() {
        assert_eq!(
            plain(render_listing(2, "hyponyms", &[])),
            format!("  hyponyms:\n      {}", Icons::EMPTY)
        );
    }

    #[test]
    fn test_error_line() {
        assert_eq!(
            plain(render_error("Cannot open thesaurus ruthes.db")),
            format!("{} Cannot open thesaurus ruthes.db", Icons::CROSS)
        );
    }
}
