//! Text rendering of a profile card.

use std::fmt::Write as _;

use super::{LayoutMode, ProfileView, PLACEHOLDER};
use crate::textures::SkinModel;

/// Label column width for `LayoutMode::Fixed`.
const FIXED_LABEL_WIDTH: usize = 22;

struct Section {
    title: String,
    rows: Vec<(&'static str, String)>,
}

pub(super) fn render(view: &ProfileView, layout: LayoutMode) -> String {
    let Some(textures) = view.textures.as_ref() else {
        return format!("{PLACEHOLDER}\n");
    };

    let updated = textures
        .updated_at()
        .map(|t| t.format("%d/%m/%Y %H:%M UTC").to_string())
        .unwrap_or_else(|| "-".to_string());

    let mut sections = vec![
        Section {
            title: view.name.clone(),
            rows: vec![
                ("Avatar", view.avatar_url.clone()),
                ("Ver en NameMC", view.namelookup_url.clone()),
            ],
        },
        Section {
            title: "Información del perfil".to_string(),
            rows: vec![
                ("UUID", view.id.clone()),
                ("Nombre", view.name.clone()),
                ("Última actualización", updated),
            ],
        },
    ];

    if let Some(skin) = &view.skin {
        let model = match skin.model {
            SkinModel::Classic => "classic",
            SkinModel::Slim => "slim",
        };
        sections.push(Section {
            title: skin.pose.as_str().to_uppercase(),
            rows: vec![
                ("Render", skin.render_url.clone()),
                ("Modelo", model.to_string()),
                ("Ver textura original", skin.texture_url.clone()),
            ],
        });
    }

    if let Some(cape) = &view.cape {
        sections.push(Section {
            title: "Capa".to_string(),
            rows: vec![
                ("Imagen", cape.image_url.clone()),
                ("Ver capa completa", cape.texture_url.clone()),
            ],
        });
    }

    match layout {
        LayoutMode::Fixed => render_fixed(&sections),
        LayoutMode::Responsive => render_responsive(&sections),
    }
}

fn render_fixed(sections: &[Section]) -> String {
    let mut out = String::new();
    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "== {} ==", section.title);
        for (label, value) in &section.rows {
            let _ = writeln!(out, "{:<width$} {}", label, value, width = FIXED_LABEL_WIDTH);
        }
    }
    out
}

fn render_responsive(sections: &[Section]) -> String {
    let label_width = sections
        .iter()
        .flat_map(|s| s.rows.iter())
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);
    let line_width = sections
        .iter()
        .flat_map(|s| s.rows.iter())
        .map(|(_, value)| label_width + 3 + value.chars().count())
        .chain(sections.iter().map(|s| s.title.chars().count()))
        .max()
        .unwrap_or(0);
    let rule = "─".repeat(line_width);

    let mut out = String::new();
    for section in sections {
        let _ = writeln!(out, "{}", section.title);
        let _ = writeln!(out, "{rule}");
        for (label, value) in &section.rows {
            let _ = writeln!(out, "{:<width$} │ {}", label, value, width = label_width);
        }
        out.push('\n');
    }
    out
}
