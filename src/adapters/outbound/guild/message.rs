use crate::domain::panel::Panel;
use crate::domain::ticket::Welcome;
use serenity::all::{
    CreateActionRow, CreateEmbed, CreateSelectMenu, CreateSelectMenuKind, CreateSelectMenuOption,
};
use serenity::model::Colour;

const PANEL_COLOUR: (u8, u8, u8) = (0x34, 0x98, 0xDB);
const WELCOME_COLOUR: (u8, u8, u8) = (87, 242, 135);

fn colour((r, g, b): (u8, u8, u8)) -> Colour {
    Colour::from_rgb(r, g, b)
}

pub fn panel_embed(panel: &Panel) -> CreateEmbed {
    CreateEmbed::default()
        .title(&panel.title)
        .description(&panel.description)
        .colour(colour(PANEL_COLOUR))
}

pub fn panel_menu(panel: &Panel) -> CreateActionRow {
    let options = panel
        .options
        .iter()
        .map(|option| {
            CreateSelectMenuOption::new(&option.label, &option.value)
                .description(&option.description)
        })
        .collect();

    let menu = CreateSelectMenu::new(&panel.menu_id, CreateSelectMenuKind::String { options })
        .placeholder(&panel.placeholder);

    CreateActionRow::SelectMenu(menu)
}

pub fn welcome_embed(welcome: &Welcome) -> CreateEmbed {
    CreateEmbed::default()
        .title(&welcome.title)
        .description(&welcome.description)
        .colour(colour(WELCOME_COLOUR))
}
