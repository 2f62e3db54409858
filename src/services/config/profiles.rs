//! Built-in rule tables for the asset layouts mapcrafter has shipped against.

use super::models::{BulkRule, Fixup, NamedRule, RuleTable, SelectionRule};

/// Archive directory holding every texture of the game.
pub const ASSETS_PREFIX: &str = "assets/minecraft/textures/";

const DYE_COLORS: &[&str] = &[
    "black",
    "blue",
    "brown",
    "cyan",
    "gray",
    "green",
    "light_blue",
    "lime",
    "magenta",
    "orange",
    "pink",
    "purple",
    "red",
    "silver",
    "white",
    "yellow",
];

const CHEST_TEXTURES: &[&str] = &[
    "normal",
    "normal_double",
    "ender",
    "trapped",
    "trapped_double",
];

/// Block images plus the biome colormaps.
pub fn builtin_default() -> RuleTable {
    RuleTable {
        name: "default".to_string(),
        directories: vec!["".to_string(), "colormap".to_string(), "blocks".to_string()],
        rules: vec![
            SelectionRule::Bulk(BulkRule {
                label: "block images".to_string(),
                prefix: format!("{ASSETS_PREFIX}blocks/"),
                strip_prefix: ASSETS_PREFIX.to_string(),
                extension: ".png".to_string(),
            }),
            assets_rule("colormap/foliage.png"),
            assets_rule("colormap/grass.png"),
        ],
        fixups: default_fixups(),
    }
}

/// [`builtin_default`] plus chest, shulker box and bed entity textures.
pub fn builtin_entities() -> RuleTable {
    let mut table = builtin_default();
    table.name = "entities".to_string();
    table.directories.extend(
        ["entity", "entity/chest", "entity/shulker", "entity/bed"]
            .iter()
            .map(|d| d.to_string()),
    );

    for chest in CHEST_TEXTURES {
        table
            .rules
            .push(assets_rule(&format!("entity/chest/{chest}.png")));
    }
    for color in DYE_COLORS {
        table
            .rules
            .push(assets_rule(&format!("entity/shulker/shulker_{color}.png")));
    }
    for color in DYE_COLORS {
        table
            .rules
            .push(assets_rule(&format!("entity/bed/{color}.png")));
    }
    // Newer versions renamed silver to light_gray for beds.
    table.rules.push(assets_rule("entity/bed/light_gray.png"));

    table
}

fn assets_rule(output: &str) -> SelectionRule {
    SelectionRule::Named(NamedRule {
        output: output.to_string(),
        archive_path: format!("{ASSETS_PREFIX}{output}"),
    })
}

fn strip_args() -> Vec<String> {
    vec!["-strip".to_string(), "{file}".to_string(), "{file}".to_string()]
}

fn default_fixups() -> Vec<Fixup> {
    vec![
        Fixup {
            pattern: "blocks/hardened_clay*.png".to_string(),
            args: strip_args(),
        },
        Fixup {
            pattern: "blocks/red_sand.png".to_string(),
            args: strip_args(),
        },
        Fixup {
            pattern: "blocks/glass_pane_top_white.png".to_string(),
            args: [
                "-strip",
                "{file}",
                "-type",
                "TrueColorMatte",
                "-define",
                "png:color-type=6",
                "{file}",
            ]
            .iter()
            .map(|a| a.to_string())
            .collect(),
        },
    ]
}
