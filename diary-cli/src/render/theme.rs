use termimad::{
    MadSkin,
    crossterm::style::{Attribute, Color},
};

pub struct OneDark;

impl OneDark {
    pub fn skin() -> MadSkin {
        let mut skin = MadSkin::default();
        skin.paragraph.set_fg(OneDark::FG);
        skin.bold.set_fg(OneDark::YELLOW);
        skin.bold.add_attr(Attribute::Bold);
        skin.italic.set_fg(OneDark::COMMENT);
        skin.inline_code.set_fg(OneDark::GREEN);
        skin.inline_code.set_bg(OneDark::BG);
        skin.bullet.set_fg(OneDark::RED);
        skin
    }

    pub const BG: Color = Color::Rgb {
        r: 0x28,
        g: 0x2c,
        b: 0x34,
    };
    pub const FG: Color = Color::Rgb {
        r: 0xab,
        g: 0xb2,
        b: 0xbf,
    };
    pub const RED: Color = Color::Rgb {
        r: 0xe0,
        g: 0x6c,
        b: 0x75,
    };
    pub const GREEN: Color = Color::Rgb {
        r: 0x98,
        g: 0xc3,
        b: 0x79,
    };
    pub const YELLOW: Color = Color::Rgb {
        r: 0xe5,
        g: 0xc0,
        b: 0x7b,
    };
    pub const COMMENT: Color = Color::Rgb {
        r: 0x5c,
        g: 0x63,
        b: 0x70,
    };
}
