use egui::RichText;

use crate::status::PauseIcon;

pub const ICON_SIZE_LABEL: f32 = 24.;
pub const ICON_SIZE_BUTTON: f32 = 40.;

macro_rules! generate_icon_function {
    ($name:ident, $glyph:expr, $size:expr) => {
        pub fn $name() -> RichText {
            RichText::new($glyph).size($size)
        }

        paste::paste! {
            pub fn [< $name _with_size >](size: f32) -> RichText {
                RichText::new($glyph).size(size)
            }
        }
    };
}

generate_icon_function!(icon_file, egui_phosphor::fill::FILE, ICON_SIZE_LABEL);
generate_icon_function!(icon_time, egui_phosphor::fill::TIMER, ICON_SIZE_LABEL);
generate_icon_function!(icon_extruder, egui_phosphor::fill::FIRE, ICON_SIZE_LABEL);
generate_icon_function!(icon_bed, egui_phosphor::fill::THERMOMETER, ICON_SIZE_LABEL);
generate_icon_function!(icon_print, egui_phosphor::fill::PRINTER, ICON_SIZE_BUTTON);
generate_icon_function!(icon_pause, egui_phosphor::fill::PAUSE, ICON_SIZE_BUTTON);
generate_icon_function!(icon_resume, egui_phosphor::fill::PLAY, ICON_SIZE_BUTTON);
generate_icon_function!(icon_stop, egui_phosphor::fill::STOP, ICON_SIZE_BUTTON);
generate_icon_function!(icon_back, egui_phosphor::fill::ARROW_LEFT, ICON_SIZE_BUTTON);
generate_icon_function!(icon_status, egui_phosphor::fill::GAUGE, ICON_SIZE_BUTTON);

pub fn icon_pause_button(icon: PauseIcon) -> RichText {
    match icon {
        PauseIcon::Pause => icon_pause(),
        PauseIcon::Resume => icon_resume(),
    }
}

pub fn install_fonts(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Fill);
    ctx.set_fonts(fonts);
}
