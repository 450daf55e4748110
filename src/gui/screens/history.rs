use iced::{Alignment, Color, Element, Length};
use iced::alignment::Horizontal;
use iced::theme;
use iced::widget::{button, column, container, row, scrollable, text, Column, Row, Space};

use crate::gui::style;
use crate::gui::types::Message;
use crate::patient::{Medication, PATIENT};

fn medication_row(medication: &Medication) -> Element<'static, Message> {
    row![
        text(medication.name).size(13).style(theme::Text::Color(Color::WHITE)),
        Space::with_width(Length::Fill),
        text(medication.schedule).size(11).style(theme::Text::Color(style::SLATE_500)),
    ]
    .align_items(Alignment::Center)
    .into()
}

fn diagnosis_chip(diagnosis: &'static str) -> Element<'static, Message> {
    container(text(diagnosis).size(11).style(theme::Text::Color(style::SLATE_200)))
        .style(style::panel(style::SLATE_800, 4.0))
        .padding([3.0, 7.0])
        .into()
}

pub fn view() -> Element<'static, Message> {
    let header = container(
        row![
            button(text("‹").size(24))
                .style(style::text_button(style::with_alpha(Color::WHITE, 0.8)))
                .padding([0.0, 6.0])
                .on_press(Message::GoBack),

            text("Notfall-Infos")
                .size(16)
                .style(theme::Text::Color(Color::WHITE))
                .width(Length::Fill)
                .horizontal_alignment(Horizontal::Center),

            Space::with_width(Length::Fixed(28.0)),
        ]
        .align_items(Alignment::Center),
    )
    .style(style::panel(style::RED_600, 0.0))
    .width(Length::Fill)
    .padding([12.0, 8.0]);

    let allergy = container(
        row![
            text("⚠").size(16).style(theme::Text::Color(style::YELLOW_500)),
            column![
                text("ALLERGIE").size(12).style(theme::Text::Color(style::YELLOW_500)),
                text(PATIENT.allergies).size(12).style(theme::Text::Color(Color::WHITE)),
            ]
            .spacing(2),
        ]
        .spacing(10),
    )
    .style(style::bordered_panel(
        style::with_alpha(style::YELLOW_500, 0.1),
        style::with_alpha(style::YELLOW_500, 0.5),
        12.0,
    ))
    .padding(12.0)
    .width(Length::Fill);

    let blood_group = container(
        row![
            text("Blutgruppe").size(12).style(theme::Text::Color(style::SLATE_400)),
            Space::with_width(Length::Fill),
            container(text(PATIENT.blood_group).size(16).style(theme::Text::Color(Color::WHITE)))
                .style(style::panel(style::SLATE_800, 8.0))
                .padding([4.0, 10.0]),
        ]
        .align_items(Alignment::Center),
    )
    .style(style::panel(style::SLATE_900, 12.0))
    .padding(12.0)
    .width(Length::Fill);

    let medication = container(
        column![
            text("AKTUELLE MEDIKATION").size(10).style(theme::Text::Color(style::SLATE_400)),
            Column::with_children(PATIENT.medication.iter().map(medication_row)).spacing(8),
        ]
        .spacing(10),
    )
    .style(style::panel(style::SLATE_900, 12.0))
    .padding(14.0)
    .width(Length::Fill);

    let diagnoses = container(
        column![
            text("DIAGNOSEN").size(10).style(theme::Text::Color(style::SLATE_400)),
            Row::with_children(PATIENT.diagnoses.iter().copied().map(diagnosis_chip)).spacing(6),
        ]
        .spacing(8),
    )
    .style(style::panel(style::SLATE_900, 12.0))
    .padding(14.0)
    .width(Length::Fill);

    let records = scrollable(
        column![allergy, blood_group, medication, diagnoses]
            .spacing(10)
            .padding(12.0),
    )
    .height(Length::Fill);

    container(column![header, records])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(style::panel(style::SLATE_950, 0.0))
        .into()
}
