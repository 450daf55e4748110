use iced::{Alignment, Color, Element, Length};
use iced::theme;
use iced::widget::{button, column, container, row, text, Space};

use crate::gui::application::WatchApplication;
use crate::gui::screens;
use crate::gui::style;
use crate::gui::types::Message;
use crate::nav::Screen;

const CASE_WIDTH: f32 = 320.0;
const CASE_HEIGHT: f32 = 400.0;
const BAND_WIDTH: f32 = 180.0;
const BAND_HEIGHT: f32 = 44.0;

fn status_bar() -> Element<'static, Message> {
    row![
        text("10:09").size(10).style(theme::Text::Color(style::SLATE_400)),
        Space::with_width(Length::Fill),
        // emergency mode indicator
        container(Space::new(Length::Fixed(6.0), Length::Fixed(6.0)))
            .style(style::panel(style::RED_500, 3.0)),
    ]
    .align_items(Alignment::Center)
    .padding([6.0, 16.0])
    .into()
}

fn side_rail() -> Element<'static, Message> {
    let crown = button(Space::new(Length::Fixed(10.0), Length::Fixed(38.0)))
        .style(style::solid_button(style::ZINC_700, Color::WHITE, 4.0))
        .padding(0.0)
        .on_press(Message::CrownPressed);

    let side_button = container(Space::new(Length::Fixed(5.0), Length::Fixed(54.0)))
        .style(style::panel(style::ZINC_700, 5.0));

    column![
        Space::with_height(Length::Fixed(46.0)),
        crown,
        Space::with_height(Length::Fixed(16.0)),
        side_button,
    ]
    .align_items(Alignment::Start)
    .into()
}

pub fn view(app: &WatchApplication) -> Element<'_, Message> {
    // Exhaustive by construction: a screen value that renders nothing is
    // unrepresentable.
    let content: Element<Message> = match app.nav.current() {
        Screen::Pairing => screens::pairing::view(&app.pairing),
        Screen::Dashboard => screens::dashboard::view(),
        Screen::Ecg => screens::ecg::view(&app.sweep),
        Screen::SpO2 => screens::spo2::view(),
        Screen::BloodPressure => screens::blood_pressure::view(),
        Screen::Temperature => screens::temperature::view(),
        Screen::History => screens::history::view(),
    };

    let screen_area = container(column![status_bar(), content])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(style::panel(Color::BLACK, 30.0));

    let case = container(screen_area)
        .width(Length::Fixed(CASE_WIDTH))
        .height(Length::Fixed(CASE_HEIGHT))
        .padding(12.0)
        .style(style::bordered_panel(style::ZINC_800, style::with_alpha(Color::WHITE, 0.1), 44.0));

    let band = || {
        container(Space::new(Length::Fixed(BAND_WIDTH), Length::Fixed(BAND_HEIGHT)))
            .style(style::panel(style::SLATE_700, 20.0))
    };

    let watch = row![
        column![band(), case, band()].align_items(Alignment::Center),
        side_rail(),
    ]
    .spacing(2);

    container(watch)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .center_y()
        .style(style::panel(style::SLATE_200, 0.0))
        .into()
}
