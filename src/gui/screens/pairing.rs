use iced::{Alignment, Color, Element, Length};
use iced::alignment::Horizontal;
use iced::theme;
use iced::widget::{button, column, container, text};

use crate::device::types::PairingStatus;
use crate::gui::style;
use crate::gui::types::Message;
use crate::patient::PATIENT;

pub fn view(status: &PairingStatus) -> Element<'static, Message> {
    let scanning = *status == PairingStatus::Scanning;

    let badge = container(
        text("BT")
            .size(24)
            .style(theme::Text::Color(if scanning { style::BLUE_400 } else { Color::WHITE })),
    )
    .style(if scanning {
        style::panel(style::with_alpha(style::BLUE_600, 0.2), 30.0)
    } else {
        style::panel(style::GREEN_500, 30.0)
    })
    .padding(16.0);

    let heading = match status {
        PairingStatus::Scanning => "Suche Signal...",
        PairingStatus::Found => "Patient gefunden",
        PairingStatus::Connecting => "Kopple Geräte...",
    };

    let mut content = column![
        badge,
        column![
            text(heading).size(18).style(theme::Text::Color(Color::WHITE)),
            text("Notfall-Protokoll aktiv").size(11).style(theme::Text::Color(style::SLATE_400)),
        ]
        .align_items(Alignment::Center)
        .spacing(4),
    ]
    .align_items(Alignment::Center)
    .spacing(16);

    if let PairingStatus::Found = status {
        let card = container(
            column![
                column![
                    text(PATIENT.full_name).size(13).style(theme::Text::Color(Color::WHITE)),
                    text(format!("⚠ {}", PATIENT.triage)).size(11).style(theme::Text::Color(style::RED_400)),
                ]
                .spacing(2),

                button(
                    text("VERBINDEN")
                        .size(13)
                        .width(Length::Fill)
                        .horizontal_alignment(Horizontal::Center),
                )
                .style(style::solid_button(style::BLUE_600, Color::WHITE, 8.0))
                .width(Length::Fill)
                .padding([8.0, 0.0])
                .on_press(Message::ConfirmPairing),
            ]
            .spacing(12),
        )
        .style(style::bordered_panel(style::SLATE_900, style::SLATE_700, 12.0))
        .padding(12.0)
        .width(Length::Fixed(200.0));

        content = content.push(card);
    }

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .center_y()
        .padding(20.0)
        .style(style::panel(style::SLATE_950, 0.0))
        .into()
}
