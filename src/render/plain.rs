//! Plain-text rendering of a listing, used by the terminal driver.

use std::fmt;

use super::{Card, ControlKind, EpisodeCard, GuestCard, ListingView};

impl fmt::Display for ListingView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(notice) = &self.notice {
            writeln!(f, "{}", notice.message())?;
            if !self.subcategories.is_empty() {
                writeln!(f, "Subcategorías: {}", self.subcategories.join(", "))?;
            }
            return Ok(());
        }

        writeln!(
            f,
            "{} {} · página {}/{}",
            self.total_items, self.kind, self.page, self.total_pages
        )?;
        writeln!(f, "{}", "─".repeat(60))?;

        for card in &self.cards {
            match card {
                Card::Episode(card) => write_episode(f, card)?,
                Card::Guest(card) => write_guest(f, card)?,
            }
            writeln!(f)?;
        }

        if !self.subcategories.is_empty() {
            writeln!(f, "Subcategorías: {}", self.subcategories.join(", "))?;
        }

        if !self.pagination.is_empty() {
            let strip: Vec<String> = self
                .pagination
                .iter()
                .map(|c| match (c.kind, c.active, c.disabled) {
                    (ControlKind::Number, true, _) => format!("[{}]", c.label),
                    (_, _, true) => format!("({})", c.label),
                    _ => c.label.clone(),
                })
                .collect();
            writeln!(f, "{}", strip.join(" "))?;
        }
        Ok(())
    }
}

fn write_episode(f: &mut fmt::Formatter<'_>, card: &EpisodeCard) -> fmt::Result {
    let star = if card.featured { " ★" } else { "" };
    match card.score {
        Some(score) => writeln!(f, "{}{} (score {})", card.heading, star, score)?,
        None => writeln!(f, "{}{}", card.heading, star)?,
    }
    if let Some(subtitle) = &card.subtitle {
        writeln!(f, "    {subtitle}")?;
    }
    if !card.description.is_empty() {
        writeln!(f, "    {}", card.description)?;
    }
    writeln!(f, "    {}", card.categories_line)?;
    for button in card.listen.iter().filter(|b| b.target.enabled) {
        writeln!(f, "    {}: {}", button.platform, button.target.href)?;
    }
    Ok(())
}

fn write_guest(f: &mut fmt::Formatter<'_>, card: &GuestCard) -> fmt::Result {
    writeln!(f, "{}", card.name)?;
    if !card.role.is_empty() {
        writeln!(f, "    {}", card.role)?;
    }
    writeln!(f, "    {}", card.bio.summary)?;
    writeln!(f, "    Episodio: {}", card.episode_label)?;
    if card.listen.enabled {
        writeln!(f, "    {}", card.listen.href)?;
    }
    for social in card.socials.iter().filter(|s| s.target.enabled) {
        writeln!(f, "    {}: {}", social.label, social.target.href)?;
    }
    Ok(())
}
