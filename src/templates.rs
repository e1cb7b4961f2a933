//! Single-slide presentation skeleton.
//!
//! Placeholders: `{cx}` and `{cy}` in the presentation part, `{objects}` in
//! the slide body and `{relationships}` in the slide's relationship part.

/// Path (relative to the package root) and content of every skeleton part.
pub const SKELETON: &[(&str, &str)] = &[
    (
        "[Content_Types].xml",
        include_str!("../templates/pptx/[Content_Types].xml"),
    ),
    ("_rels/.rels", include_str!("../templates/pptx/_rels/.rels")),
    (
        "docProps/app.xml",
        include_str!("../templates/pptx/docProps/app.xml"),
    ),
    (
        "docProps/core.xml",
        include_str!("../templates/pptx/docProps/core.xml"),
    ),
    (
        "ppt/presentation.xml",
        include_str!("../templates/pptx/ppt/presentation.xml"),
    ),
    (
        "ppt/_rels/presentation.xml.rels",
        include_str!("../templates/pptx/ppt/_rels/presentation.xml.rels"),
    ),
    (
        "ppt/presProps.xml",
        include_str!("../templates/pptx/ppt/presProps.xml"),
    ),
    (
        "ppt/viewProps.xml",
        include_str!("../templates/pptx/ppt/viewProps.xml"),
    ),
    (
        "ppt/tableStyles.xml",
        include_str!("../templates/pptx/ppt/tableStyles.xml"),
    ),
    (
        "ppt/slides/slide1.xml",
        include_str!("../templates/pptx/ppt/slides/slide1.xml"),
    ),
    (
        "ppt/slides/_rels/slide1.xml.rels",
        include_str!("../templates/pptx/ppt/slides/_rels/slide1.xml.rels"),
    ),
    (
        "ppt/slideLayouts/slideLayout1.xml",
        include_str!("../templates/pptx/ppt/slideLayouts/slideLayout1.xml"),
    ),
    (
        "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
        include_str!("../templates/pptx/ppt/slideLayouts/_rels/slideLayout1.xml.rels"),
    ),
    (
        "ppt/slideMasters/slideMaster1.xml",
        include_str!("../templates/pptx/ppt/slideMasters/slideMaster1.xml"),
    ),
    (
        "ppt/slideMasters/_rels/slideMaster1.xml.rels",
        include_str!("../templates/pptx/ppt/slideMasters/_rels/slideMaster1.xml.rels"),
    ),
    (
        "ppt/theme/theme1.xml",
        include_str!("../templates/pptx/ppt/theme/theme1.xml"),
    ),
];

pub const PRESENTATION_PART: &str = "ppt/presentation.xml";
pub const SLIDE_PART: &str = "ppt/slides/slide1.xml";
pub const SLIDE_RELS_PART: &str = "ppt/slides/_rels/slide1.xml.rels";
pub const MEDIA_DIR: &str = "ppt/media";

/// Fill the placeholders of one skeleton part. Parts without
/// placeholders come back unchanged.
pub fn render_part(
    path: &str,
    content: &str,
    slide_emu: (i64, i64),
    objects: &str,
    relationships: &str,
) -> String {
    match path {
        PRESENTATION_PART => content
            .replace("{cx}", &slide_emu.0.to_string())
            .replace("{cy}", &slide_emu.1.to_string()),
        SLIDE_PART => content.replace("{objects}", objects),
        SLIDE_RELS_PART => content.replace("{relationships}", relationships),
        _ => content.to_string(),
    }
}
