use crate::domain::{catalog::entities::Catalog, detection::value_objects::ResponseFormat};

/// Renders the instruction sent alongside the tray photo.
///
/// Captioning models take no instruction, so `None` is returned for them.
/// `menu_limit` truncates the enumerated menu for models with small inputs.
pub fn build_prompt(
    format: ResponseFormat,
    catalog: &Catalog,
    menu_limit: Option<usize>,
) -> Option<String> {
    let menu_list = catalog
        .names()
        .take(menu_limit.unwrap_or(usize::MAX))
        .map(|name| format!("- {name}"))
        .collect::<Vec<_>>()
        .join("\n");

    match format {
        ResponseFormat::LinePattern => Some(format!(
            "You are looking at a photo of a bakery tray. This is the menu:\n\
             {menu_list}\n\n\
             Which of these items are on the tray, and how many of each?\n\
             Answer with one line per item in exactly this format:\n\
             * Item Name (xN)\n\
             Only list items that appear on the menu."
        )),
        ResponseFormat::JsonObject => Some(format!(
            "You are looking at a photo of a bakery tray. This is the menu:\n\
             {menu_list}\n\n\
             Which of these items are on the tray, and how many of each?\n\
             Answer with a single JSON object that maps each item name, spelled as on \
             the menu, to its integer count, for example {{\"Croissant\": 2}}.\n\
             Only list items that appear on the menu and add no other text."
        )),
        ResponseFormat::Caption => None,
    }
}
