use super::naming::TextureName;

/// Which fragment to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Member declarations for `textures.h`.
    Header,
    /// Constructor initializer list for `textures.cpp`.
    Source,
    /// Header fragment, two blank lines, source fragment.
    Both,
}

/// ```text
///     TextureImage GRASS, STONE_BRICK;
///     std::vector<TextureImage*> textures;
/// ```
pub fn render_header(names: &[TextureName]) -> String {
    if names.is_empty() {
        return String::new();
    }

    let symbols: Vec<&str> = names.iter().map(|n| n.symbol.as_str()).collect();
    format!(
        "\tTextureImage {};\n\tstd::vector<TextureImage*> textures;\n",
        symbols.join(", ")
    )
}

/// ```text
/// : GRASS("grass"), STONE_BRICK("stoneBrick"), textures({&GRASS, &STONE_BRICK}) {
/// ```
pub fn render_source(names: &[TextureName]) -> String {
    if names.is_empty() {
        return String::new();
    }

    let initializers: Vec<String> = names
        .iter()
        .map(|n| format!("{}(\"{}\")", n.symbol, n.base))
        .collect();
    let references: Vec<String> = names.iter().map(|n| format!("&{}", n.symbol)).collect();

    format!(
        ": {}, textures({{{}}}) {{\n",
        initializers.join(", "),
        references.join(", ")
    )
}

pub fn render(mode: OutputMode, names: &[TextureName]) -> String {
    match mode {
        OutputMode::Header => render_header(names),
        OutputMode::Source => render_source(names),
        OutputMode::Both if names.is_empty() => String::new(),
        OutputMode::Both => format!("{}\n\n{}", render_header(names), render_source(names)),
    }
}
