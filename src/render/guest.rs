//! Guest card and modal projection.

use std::collections::HashSet;

use serde::Serialize;

use super::LinkTarget;
use crate::models::{Config, Guest, GuestLink};
use crate::utils::{dom_id, get_domain, paragraphs, truncate_words};

const IMAGE_EXTENSIONS: &[&str] = &[".png", ".svg", ".jpg", ".jpeg", ".webp", ".gif", ".ico"];

/// Concrete icon for a link button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Icon {
    /// Icon-font class list
    Glyph { class: String },
    /// Image asset
    Image { src: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialButton {
    pub label: String,
    pub target: LinkTarget,
    pub icon: Option<Icon>,
}

/// Collapsible biography shown on the card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BioBlock {
    pub collapse_id: String,
    pub summary: String,
    pub summary_truncated: bool,
    /// Full biography split on line breaks
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuestCard {
    pub dom_id: String,
    /// Id of the paired detail modal
    pub modal_id: String,
    pub image: String,
    pub image_alt: String,
    pub name: String,
    pub role: String,
    pub listen: LinkTarget,
    pub bio: BioBlock,
    pub socials: Vec<SocialButton>,
    pub episode_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuestModal {
    pub id: String,
    pub name: String,
    pub role: String,
    pub bio: String,
    pub episode_label: String,
    pub listen: LinkTarget,
    pub listen_label: String,
}

/// Keeps synthetic ids unique within one render pass.
#[derive(Debug, Default)]
pub(crate) struct IdRegistry {
    taken: HashSet<String>,
}

impl IdRegistry {
    fn claim(&mut self, candidate: String) -> String {
        if self.taken.insert(candidate.clone()) {
            return candidate;
        }
        let mut n = 2;
        loop {
            let next = format!("{candidate}_{n}");
            if self.taken.insert(next.clone()) {
                return next;
            }
            n += 1;
        }
    }
}

pub(crate) fn guest_card(guest: &Guest, config: &Config, ids: &mut IdRegistry) -> (GuestCard, GuestModal) {
    let raw_id = guest.id.as_str();
    let modal_id = ids.claim(dom_id("modalGuest_", raw_id));
    let suffix = &modal_id["modalGuest_".len()..];

    let listen = LinkTarget::new(guest.episode_link());
    let episode_label = guest
        .episode_title()
        .unwrap_or(&config.messages.pending_episode)
        .to_string();

    let card = GuestCard {
        dom_id: format!("guest-{suffix}"),
        modal_id: modal_id.clone(),
        image: guest.image.clone(),
        image_alt: guest.name.clone(),
        name: guest.name.clone(),
        role: guest.role.clone(),
        listen: listen.clone(),
        bio: bio_block(guest, suffix, config),
        socials: guest.links.iter().map(|link| social_button(link, config)).collect(),
        episode_label: episode_label.clone(),
    };

    let modal = GuestModal {
        id: modal_id,
        name: guest.name.clone(),
        role: guest.role.clone(),
        bio: guest
            .full_bio()
            .or(guest.short_bio())
            .unwrap_or(&config.messages.missing_bio)
            .to_string(),
        episode_label,
        listen,
        listen_label: config.messages.listen_label.clone(),
    };

    (card, modal)
}

fn bio_block(guest: &Guest, suffix: &str, config: &Config) -> BioBlock {
    let budget = config.guests.description_chars;
    let (summary, summary_truncated) = match (guest.short_bio(), guest.full_bio()) {
        (Some(short), _) => {
            let (text, cut) = truncate_words(short, budget);
            (text.into_owned(), cut)
        }
        (None, Some(full)) => {
            let (text, cut) = truncate_words(full, budget);
            (text.into_owned(), cut)
        }
        (None, None) => (config.messages.missing_bio.clone(), false),
    };

    let paragraphs = match guest.full_bio().or(guest.short_bio()) {
        Some(text) => paragraphs(text),
        None => Vec::new(),
    };

    BioBlock {
        collapse_id: format!("bio-{suffix}"),
        summary,
        summary_truncated,
        paragraphs,
    }
}

fn social_button(link: &GuestLink, config: &Config) -> SocialButton {
    let kind = link.kind.trim();
    let label = if !kind.is_empty() {
        kind.to_string()
    } else {
        get_domain(&link.url).unwrap_or_else(|| link.url.trim().to_string())
    };

    SocialButton {
        label,
        target: LinkTarget::new(Some(&link.url)),
        icon: resolve_icon(link, config),
    }
}

/// Pick the icon for a link.
///
/// An explicit icon reference wins (image path or glyph class); otherwise
/// the declared type, then the URL's host, is looked up in the configured
/// icon map. Unknown links get no icon.
pub fn resolve_icon(link: &GuestLink, config: &Config) -> Option<Icon> {
    if let Some(icon) = link.icon.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        return Some(if looks_like_image(icon) {
            Icon::Image { src: icon.to_string() }
        } else {
            Icon::Glyph { class: icon.to_string() }
        });
    }

    let mapping = config.icon_for(&link.kind).or_else(|| {
        let host = get_domain(&link.url)?;
        config.icons.iter().find(|m| {
            let kind = m.kind.to_lowercase();
            host == format!("{kind}.com") || host.starts_with(&format!("{kind}."))
        })
    })?;

    match (&mapping.image, &mapping.glyph) {
        (Some(src), _) => Some(Icon::Image { src: src.clone() }),
        (None, Some(class)) => Some(Icon::Glyph { class: class.clone() }),
        (None, None) => None,
    }
}

fn looks_like_image(icon: &str) -> bool {
    let lower = icon.to_lowercase();
    lower.contains('/') || IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GuestId;

    fn link(url: &str, kind: &str, icon: Option<&str>) -> GuestLink {
        GuestLink {
            url: url.into(),
            kind: kind.into(),
            icon: icon.map(str::to_string),
        }
    }

    fn sample_guest() -> Guest {
        Guest {
            id: GuestId::new("1.5"),
            name: "Ana Pérez".into(),
            role: "Ingeniera de datos".into(),
            image: "img/ana.jpg".into(),
            short_bio: Some("Trabaja con datos.".into()),
            full_bio: Some("Trabaja con datos.\nDa clases los sábados.".into()),
            links: vec![
                link("https://www.linkedin.com/in/ana", "linkedin", None),
                link("https://ana.dev", "web", Some("img/icons/web.svg")),
                link("https://github.com/ana", "", None),
                link("https://example.org/ana", "blog", None),
                link("", "twitter", None),
            ],
            episode_link: None,
            episode_number: Some(4),
            episode_title: None,
        }
    }

    #[test]
    fn test_card_and_modal_ids_pair() {
        let config = Config::default();
        let mut ids = IdRegistry::default();
        let (card, modal) = guest_card(&sample_guest(), &config, &mut ids);

        assert_eq!(card.modal_id, "modalGuest_1_5");
        assert_eq!(modal.id, card.modal_id);
        assert_eq!(card.dom_id, "guest-1_5");
        assert_eq!(card.bio.collapse_id, "bio-1_5");
    }

    #[test]
    fn test_colliding_ids_made_unique() {
        let config = Config::default();
        let mut ids = IdRegistry::default();
        let mut other = sample_guest();
        other.id = GuestId::new("1_5");

        let (first, _) = guest_card(&sample_guest(), &config, &mut ids);
        let (second, _) = guest_card(&other, &config, &mut ids);
        assert_ne!(first.modal_id, second.modal_id);
        assert_eq!(second.modal_id, "modalGuest_1_5_2");
    }

    #[test]
    fn test_missing_fields_degrade() {
        let config = Config::default();
        let mut ids = IdRegistry::default();
        let (card, modal) = guest_card(&sample_guest(), &config, &mut ids);

        assert!(!card.listen.enabled);
        assert_eq!(card.listen.href, "#");
        assert_eq!(card.episode_label, "Pendiente");
        assert_eq!(modal.episode_label, "Pendiente");
        assert!(!card.socials[4].target.enabled);
    }

    #[test]
    fn test_bio_block() {
        let config = Config::default();
        let mut ids = IdRegistry::default();
        let (card, modal) = guest_card(&sample_guest(), &config, &mut ids);

        assert_eq!(card.bio.summary, "Trabaja con datos.");
        assert!(!card.bio.summary_truncated);
        assert_eq!(
            card.bio.paragraphs,
            vec!["Trabaja con datos.", "Da clases los sábados."]
        );
        assert_eq!(modal.bio, "Trabaja con datos.\nDa clases los sábados.");
    }

    #[test]
    fn test_bio_fallback_text() {
        let config = Config::default();
        let mut ids = IdRegistry::default();
        let mut guest = sample_guest();
        guest.short_bio = None;
        guest.full_bio = Some("   ".into());

        let (card, modal) = guest_card(&guest, &config, &mut ids);
        assert_eq!(modal.bio, "Sin biografía disponible.");
        assert_eq!(card.bio.summary, "Sin biografía disponible.");
        assert!(card.bio.paragraphs.is_empty());
    }

    #[test]
    fn test_icons_resolved() {
        let config = Config::default();
        let mut ids = IdRegistry::default();
        let (card, _) = guest_card(&sample_guest(), &config, &mut ids);

        assert_eq!(
            card.socials[0].icon,
            Some(Icon::Glyph { class: "bi bi-linkedin".into() })
        );
        assert_eq!(
            card.socials[1].icon,
            Some(Icon::Image { src: "img/icons/web.svg".into() })
        );
        // Untyped link falls back to the host.
        assert_eq!(card.socials[2].label, "github.com");
        assert_eq!(
            card.socials[2].icon,
            Some(Icon::Glyph { class: "bi bi-github".into() })
        );
        assert_eq!(card.socials[3].icon, None);
    }
}
