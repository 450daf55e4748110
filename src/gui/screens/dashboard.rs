use iced::{Alignment, Color, Element, Length};
use iced::theme;
use iced::widget::{button, column, container, row, text, Space};

use crate::gui::style;
use crate::gui::types::Message;
use crate::nav::Screen;
use crate::patient::PATIENT;
use crate::vitals;

/**
 * Tap targets of the 2x2 vital tile grid, in reading order.
 */
pub const TILE_TARGETS: [(&str, Screen); 4] = [
    ("BPM", Screen::Ecg),
    ("SPO2", Screen::SpO2),
    ("RR", Screen::BloodPressure),
    ("TEMP", Screen::Temperature),
];

/**
 * The patient header is one big tap target for the emergency record.
 */
pub const HEADER_TARGET: Screen = Screen::History;

fn tile_label(icon: Option<&'static str>, icon_color: Color, label: &'static str) -> Element<'static, Message> {
    let mut label_row = row![].align_items(Alignment::Center).spacing(4);
    if let Some(icon) = icon {
        label_row = label_row.push(text(icon).size(14).style(theme::Text::Color(icon_color)));
    }
    label_row = label_row.push(Space::with_width(Length::Fill));
    label_row = label_row.push(
        text(label).size(9).style(theme::Text::Color(style::with_alpha(icon_color, 0.5))),
    );
    label_row.into()
}

fn heart_rate_tile() -> Element<'static, Message> {
    // Thin level bar under the number, roughly 80% full like the source.
    let level_bar = row![
        container(Space::new(Length::Fill, Length::Fixed(5.0)))
            .width(Length::FillPortion(4))
            .style(style::panel(style::RED_500, 2.0)),
        Space::with_width(Length::FillPortion(1)),
    ];

    let content = column![
        tile_label(Some("♥"), style::RED_500, "BPM"),
        text(vitals::CURRENT.heart_rate_bpm.to_string())
            .size(34)
            .style(theme::Text::Color(Color::WHITE)),
        container(level_bar)
            .width(Length::Fill)
            .style(style::panel(style::with_alpha(style::SLATE_800, 0.5), 2.0)),
    ]
    .align_items(Alignment::Center)
    .spacing(6)
    .width(Length::Fill);

    button(content)
        .style(style::tile(style::RED_500))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(10.0)
        .on_press(Message::Navigate(TILE_TARGETS[0].1))
        .into()
}

fn spo2_tile() -> Element<'static, Message> {
    let badge = container(
        text("NIEDRIG").size(8).style(theme::Text::Color(style::YELLOW_500)),
    )
    .style(style::panel(style::with_alpha(style::YELLOW_500, 0.2), 4.0))
    .padding([2.0, 6.0]);

    let content = column![
        tile_label(None, style::CYAN_400, "SPO2"),
        text(format!("{}%", vitals::CURRENT.spo2_percent))
            .size(34)
            .style(theme::Text::Color(style::CYAN_400)),
        badge,
    ]
    .align_items(Alignment::Center)
    .spacing(6)
    .width(Length::Fill);

    button(content)
        .style(style::tile(style::CYAN_400))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(10.0)
        .on_press(Message::Navigate(TILE_TARGETS[1].1))
        .into()
}

fn blood_pressure_tile() -> Element<'static, Message> {
    let content = column![
        tile_label(None, style::ORANGE_400, "RR"),
        text(vitals::CURRENT.systolic_mmhg.to_string())
            .size(24)
            .style(theme::Text::Color(Color::WHITE)),
        container(Space::new(Length::Fill, Length::Fixed(1.0)))
            .style(style::panel(style::with_alpha(style::ORANGE_400, 0.2), 0.0)),
        text(vitals::CURRENT.diastolic_mmhg.to_string())
            .size(24)
            .style(theme::Text::Color(style::ORANGE_200)),
    ]
    .align_items(Alignment::Center)
    .spacing(4)
    .width(Length::Fill);

    button(content)
        .style(style::tile(style::ORANGE_400))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(10.0)
        .on_press(Message::Navigate(TILE_TARGETS[2].1))
        .into()
}

fn temperature_tile() -> Element<'static, Message> {
    let content = column![
        tile_label(None, style::SLATE_400, "TEMP"),
        Space::with_height(Length::Fill),
        row![
            text(format!("{:.1}", vitals::CURRENT.temperature_celsius))
                .size(34)
                .style(theme::Text::Color(Color::WHITE)),
            text("°C").size(13).style(theme::Text::Color(style::SLATE_500)),
        ]
        .align_items(Alignment::End)
        .spacing(3),
        Space::with_height(Length::Fill),
    ]
    .align_items(Alignment::Center)
    .width(Length::Fill);

    button(content)
        .style(style::tile(style::SLATE_400))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(10.0)
        .on_press(Message::Navigate(TILE_TARGETS[3].1))
        .into()
}

pub fn view() -> Element<'static, Message> {
    let header = button(
        row![
            column![
                text(PATIENT.short_name).size(13).style(theme::Text::Color(Color::WHITE)),
                container(text("NOTFALL").size(8).style(theme::Text::Color(style::RED_400)))
                    .style(style::panel(style::with_alpha(style::RED_500, 0.2), 3.0))
                    .padding([1.0, 5.0]),
            ]
            .spacing(3),

            Space::with_width(Length::Fill),

            container(text("+").size(16).style(theme::Text::Color(style::RED_600)))
                .style(style::panel(Color::WHITE, 14.0))
                .padding([2.0, 9.0]),
        ]
        .align_items(Alignment::Center),
    )
    .style(style::solid_button(style::SLATE_900, Color::WHITE, 0.0))
    .width(Length::Fill)
    .padding([10.0, 14.0])
    .on_press(Message::Navigate(HEADER_TARGET));

    let grid = column![
        row![heart_rate_tile(), spo2_tile()].spacing(4).height(Length::Fill),
        row![blood_pressure_tile(), temperature_tile()].spacing(4).height(Length::Fill),
    ]
    .spacing(4)
    .padding(4.0)
    .height(Length::Fill);

    container(column![header, grid])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(style::panel(style::SLATE_950, 0.0))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiles_navigate_to_distinct_detail_screens() {
        let mut targets = TILE_TARGETS.iter().map(|(_, t)| *t).collect::<Vec<_>>();
        targets.sort_by_key(|t| format!("{}", t));
        targets.dedup();
        assert_eq!(targets.len(), TILE_TARGETS.len());

        for (_, target) in TILE_TARGETS {
            assert!(target.is_detail());
        }
    }

    #[test]
    fn tiles_map_to_their_vital_screens() {
        assert_eq!(TILE_TARGETS[0].1, Screen::Ecg);
        assert_eq!(TILE_TARGETS[1].1, Screen::SpO2);
        assert_eq!(TILE_TARGETS[2].1, Screen::BloodPressure);
        assert_eq!(TILE_TARGETS[3].1, Screen::Temperature);
        assert_eq!(HEADER_TARGET, Screen::History);
    }
}
