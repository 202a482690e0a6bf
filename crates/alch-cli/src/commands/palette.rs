//! Sample palette command.

use crate::Session;
use alch_core::Palette;
use anyhow::Result;
use serde_json::json;

pub fn run(session: &Session) -> Result<()> {
    let conv = session.config.converter();
    let palette = Palette::sample();

    if session.json {
        let colors: Vec<_> = palette
            .colors()
            .iter()
            .map(|color| {
                let out = conv.display(&color.lch());
                json!({
                    "color": color,
                    "hex": conv.to_hex(out.rgb),
                    "rgb": out,
                })
            })
            .collect();
        return super::print_json(&json!({
            "policy": session.config.policy(),
            "selected": palette.selected_index(),
            "colors": colors,
        }));
    }

    for (i, color) in palette.colors().iter().enumerate() {
        let out = conv.display(&color.lch());
        let marker = if i == palette.selected_index() { '*' } else { ' ' };
        println!(
            "{marker} {:<8} {}  {:>6.0} cd/m2  L={:.2} C={:.2} h={:.0}  {}",
            color.name,
            conv.to_hex(out.rgb),
            color.nits,
            color.lightness,
            color.chroma,
            color.hue,
            super::gamut_label(&out),
        );
    }
    Ok(())
}
