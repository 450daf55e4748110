use iced::{Background, Border, Color, Shadow, Theme, theme};
use iced::widget::{button, container};

// Palette lifted from the mock-up's design (tailwind slate/zinc darks plus
// one accent per vital sign).
pub const SLATE_950: Color = Color { r: 0.0078, g: 0.0235, b: 0.0902, a: 1.0 };
pub const SLATE_900: Color = Color { r: 0.0588, g: 0.0902, b: 0.1647, a: 1.0 };
pub const SLATE_800: Color = Color { r: 0.1176, g: 0.1608, b: 0.2314, a: 1.0 };
pub const SLATE_700: Color = Color { r: 0.2, g: 0.2549, b: 0.3333, a: 1.0 };
pub const SLATE_500: Color = Color { r: 0.3922, g: 0.4549, b: 0.5451, a: 1.0 };
pub const SLATE_400: Color = Color { r: 0.5804, g: 0.6392, b: 0.7216, a: 1.0 };
pub const SLATE_300: Color = Color { r: 0.7961, g: 0.8353, b: 0.8824, a: 1.0 };
pub const SLATE_200: Color = Color { r: 0.8863, g: 0.9098, b: 0.9412, a: 1.0 };
pub const ZINC_800: Color = Color { r: 0.1529, g: 0.1529, b: 0.1647, a: 1.0 };
pub const ZINC_700: Color = Color { r: 0.2471, g: 0.2471, b: 0.2745, a: 1.0 };
pub const ZINC_500: Color = Color { r: 0.4431, g: 0.4431, b: 0.4784, a: 1.0 };
pub const RED_400: Color = Color { r: 0.9725, g: 0.4431, b: 0.4431, a: 1.0 };
pub const RED_500: Color = Color { r: 0.9373, g: 0.2667, b: 0.2667, a: 1.0 };
pub const RED_600: Color = Color { r: 0.8627, g: 0.1490, b: 0.1490, a: 1.0 };
pub const GREEN_400: Color = Color { r: 0.2902, g: 0.8706, b: 0.5020, a: 1.0 };
pub const GREEN_500: Color = Color { r: 0.1333, g: 0.7725, b: 0.3686, a: 1.0 };
pub const CYAN_400: Color = Color { r: 0.1333, g: 0.8275, b: 0.9333, a: 1.0 };
pub const ORANGE_200: Color = Color { r: 0.9961, g: 0.8431, b: 0.6667, a: 1.0 };
pub const ORANGE_400: Color = Color { r: 0.9843, g: 0.5725, b: 0.2353, a: 1.0 };
pub const YELLOW_500: Color = Color { r: 0.9176, g: 0.7020, b: 0.0314, a: 1.0 };
pub const BLUE_400: Color = Color { r: 0.3765, g: 0.6471, b: 0.9804, a: 1.0 };
pub const BLUE_600: Color = Color { r: 0.1451, g: 0.3882, b: 0.9216, a: 1.0 };
pub const GRID_GRAY: Color = Color { r: 0.2667, g: 0.2667, b: 0.2667, a: 1.0 };

pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}

pub struct PanelStyle {
    background: Color,
    border_color: Color,
    border_width: f32,
    radius: f32,
}

impl container::StyleSheet for PanelStyle {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: None,
            background: Some(Background::Color(self.background)),
            border: Border {
                color: self.border_color,
                width: self.border_width,
                radius: self.radius.into(),
            },
            shadow: Shadow::default(),
        }
    }
}

pub fn panel(background: Color, radius: f32) -> theme::Container {
    theme::Container::Custom(Box::new(PanelStyle {
        background,
        border_color: Color::TRANSPARENT,
        border_width: 0.0,
        radius,
    }))
}

pub fn bordered_panel(background: Color, border_color: Color, radius: f32) -> theme::Container {
    theme::Container::Custom(Box::new(PanelStyle {
        background,
        border_color,
        border_width: 1.0,
        radius,
    }))
}

// Dashboard vital tiles: a translucent tint of the vital's accent color.
pub struct TileButtonStyle {
    tint: Color,
}

impl button::StyleSheet for TileButtonStyle {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            shadow_offset: Default::default(),
            background: Some(Background::Color(with_alpha(self.tint, 0.1))),
            text_color: Color::WHITE,
            border: Border {
                color: Color::TRANSPARENT,
                width: 1.0,
                radius: 12.0.into(),
            },
            shadow: Shadow::default(),
        }
    }

    fn pressed(&self, style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(with_alpha(self.tint, 0.2))),
            border: Border {
                color: with_alpha(self.tint, 0.3),
                width: 1.0,
                radius: 12.0.into(),
            },
            ..self.active(style)
        }
    }
}

pub fn tile(tint: Color) -> theme::Button {
    theme::Button::Custom(Box::new(TileButtonStyle { tint }))
}

pub struct SolidButtonStyle {
    background: Color,
    text_color: Color,
    radius: f32,
}

impl button::StyleSheet for SolidButtonStyle {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            shadow_offset: Default::default(),
            background: Some(Background::Color(self.background)),
            text_color: self.text_color,
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: self.radius.into(),
            },
            shadow: Shadow::default(),
        }
    }
}

pub fn solid_button(background: Color, text_color: Color, radius: f32) -> theme::Button {
    theme::Button::Custom(Box::new(SolidButtonStyle { background, text_color, radius }))
}

pub struct TextButtonStyle {
    text_color: Color,
}

impl button::StyleSheet for TextButtonStyle {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            shadow_offset: Default::default(),
            background: None,
            text_color: self.text_color,
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: 0.0.into(),
            },
            shadow: Shadow::default(),
        }
    }
}

pub fn text_button(text_color: Color) -> theme::Button {
    theme::Button::Custom(Box::new(TextButtonStyle { text_color }))
}
