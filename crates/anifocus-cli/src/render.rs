//! Terminal rendering for grids, sections, and the detail view.

use anifocus_core::models::WatchStatus;

use crate::app::{Detail, View};
use crate::card::{Card, Tab};
use crate::format;

pub fn print(view: &View) {
    match view {
        View::Grid { tab, cards } => {
            if let Tab::Status(status) = tab {
                print_heading(*status);
            }
            print_cards(cards);
        }
        View::Sections(sections) => {
            for (status, cards) in sections {
                print_heading(*status);
                if cards.is_empty() {
                    println!("  (none)");
                } else {
                    print_cards(cards);
                }
                println!();
            }
        }
        View::Detail(detail) => print_detail(detail),
        View::Notice(message) => println!("{message}"),
    }
}

fn print_heading(status: WatchStatus) {
    println!("── {} ──", status.as_str());
}

fn print_cards(cards: &[Card]) {
    for card in cards {
        println!(
            "{:>7}  {:<45} {:>8}  {:>7}",
            card.id,
            truncate(&card.title, 45),
            format::score(card.score),
            format::episodes(card.episodes),
        );
        if let Some(progress) = &card.progress {
            let updated = card
                .updated_at
                .map(|t| format!("   updated {}", format::relative_time(&t)))
                .unwrap_or_default();
            println!(
                "         {} {} / {} EP{updated}",
                format::progress_bar(progress.percent),
                progress.watched,
                format::episode_count(progress.total),
            );
        }
        if card.watch_again {
            println!("         watch again: anifocus rewatch {}", card.id);
        }
    }
}

fn print_detail(detail: &Detail) {
    let entry = &detail.entry;
    println!("{}", entry.preferred_title());
    println!(
        "Score: {} • {}",
        format::score_value(entry.score),
        format::episodes(entry.episodes)
    );
    match detail.tracked {
        Some((status, watched)) => println!(
            "Status: {} • {} / {} EP",
            status,
            watched,
            format::episode_count(entry.episodes)
        ),
        None => println!("Not in your library."),
    }
    if let Some(cover) = &entry.cover_url {
        println!("Cover: {cover}");
    }
    println!();
    println!(
        "{}",
        entry
            .synopsis
            .as_deref()
            .unwrap_or("No description available.")
    );
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max - 1).collect();
        format!("{cut}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_untouched() {
        assert_eq!(truncate("Frieren", 45), "Frieren");
    }

    #[test]
    fn test_truncate_long_string() {
        let long = "a".repeat(60);
        let out = truncate(&long, 45);
        assert_eq!(out.chars().count(), 45);
        assert!(out.ends_with('…'));
    }
}
