use iced::{Alignment, Color, Element, Length};
use iced::theme;
use iced::widget::{button, column, container, row, text};

use crate::gui::style;
use crate::gui::types::Message;

pub mod blood_pressure;
pub mod dashboard;
pub mod ecg;
pub mod history;
pub mod pairing;
pub mod spo2;
pub mod temperature;

// Compact header shared by the detail screens: back control plus an
// accent-colored title.
pub(crate) fn detail_header(title: &'static str, subtitle: &'static str, accent: Color) -> Element<'static, Message> {
    row![
        button(text("‹").size(22))
            .style(style::solid_button(style::SLATE_800, style::SLATE_300, 14.0))
            .padding([0.0, 10.0])
            .on_press(Message::GoBack),

        column![
            text(title).size(16).style(theme::Text::Color(accent)),
            text(subtitle).size(10).style(theme::Text::Color(style::SLATE_400)),
        ].spacing(2),
    ]
    .align_items(Alignment::Center)
    .spacing(10)
    .padding([8.0, 10.0])
    .into()
}

// Small value card used below the ECG trace and the blood pressure chart.
pub(crate) fn stat_card(label: &'static str, value: String, value_color: Color, note: &'static str, note_color: Color) -> Element<'static, Message> {
    container(
        column![
            text(label).size(10).style(theme::Text::Color(style::SLATE_400)),
            text(value).size(22).style(theme::Text::Color(value_color)),
            text(note).size(9).style(theme::Text::Color(note_color)),
        ]
        .align_items(Alignment::Center)
        .spacing(2),
    )
    .style(style::panel(style::SLATE_900, 10.0))
    .padding(10.0)
    .width(Length::Fill)
    .center_x()
    .into()
}
