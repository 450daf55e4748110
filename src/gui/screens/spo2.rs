use iced::{Alignment, Color, Element, Length, Point, Rectangle, Renderer, Theme};
use iced::mouse;
use iced::theme;
use iced::widget::{canvas, column, container, row, text, Canvas, Space};
use iced::widget::canvas::{Frame, Geometry, LineCap, LineDash, Path, Stroke};

use crate::gui::screens::detail_header;
use crate::gui::style;
use crate::gui::types::Message;
use crate::vitals::SPO2_TREND;

// The trend is drawn in the source's chart coordinates (0..100 both axes)
// and scaled to the canvas bounds.
struct TrendChart;

impl canvas::Program<Message> for TrendChart {
    type State = ();

    fn draw(&self, _state: &(), renderer: &Renderer, _theme: &Theme, bounds: Rectangle, _cursor: mouse::Cursor) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let scale = |(x, y): (f32, f32)| {
            Point::new(x / 100.0 * bounds.width, y / 100.0 * bounds.height)
        };

        let axes = Path::new(|b| {
            b.move_to(Point::new(0.0, 0.0));
            b.line_to(Point::new(0.0, bounds.height));
            b.line_to(Point::new(bounds.width, bounds.height));
        });
        frame.stroke(&axes, Stroke::default().with_color(style::SLATE_700).with_width(1.0));

        // 95% threshold
        let threshold = Path::line(scale((0.0, 50.0)), scale((100.0, 50.0)));
        let dashed = Stroke {
            line_dash: LineDash { segments: &[4.0, 4.0], offset: 0 },
            ..Stroke::default().with_color(style::SLATE_700).with_width(1.0)
        };
        frame.stroke(&threshold, dashed);

        let trend = Path::new(|b| {
            b.move_to(scale(SPO2_TREND[0]));
            for &point in &SPO2_TREND[1..] {
                b.line_to(scale(point));
            }
        });
        let stroke = Stroke {
            line_cap: LineCap::Round,
            ..Stroke::default().with_color(style::CYAN_400).with_width(3.0)
        };
        frame.stroke(&trend, stroke);

        let current = Path::circle(scale(SPO2_TREND[SPO2_TREND.len() - 1]), 4.0);
        frame.fill(&current, style::CYAN_400);

        vec![frame.into_geometry()]
    }
}

pub fn view() -> Element<'static, Message> {
    let axis_labels = column![
        text("100%").size(9).style(theme::Text::Color(style::SLATE_500)),
        Space::with_height(Length::Fill),
        text("95%").size(9).style(theme::Text::Color(style::SLATE_500)),
        Space::with_height(Length::Fill),
        text("91%").size(9).style(theme::Text::Color(style::CYAN_400)),
    ]
    .height(Length::Fixed(130.0));

    let chart = row![
        axis_labels,
        Canvas::new(TrendChart)
            .width(Length::Fill)
            .height(Length::Fixed(130.0)),
    ]
    .spacing(8)
    .align_items(Alignment::Center)
    .padding([0.0, 16.0]);

    let warning = container(
        row![
            text("⚠").size(16).style(theme::Text::Color(style::YELLOW_500)),
            column![
                text("Hypoxie-Warnung").size(13).style(theme::Text::Color(Color::WHITE)),
                text("Sättigung fällt kontinuierlich. Sauerstoffgabe empfohlen.")
                    .size(11)
                    .style(theme::Text::Color(style::SLATE_400)),
            ]
            .spacing(3),
        ]
        .spacing(10),
    )
    .style(style::panel(style::SLATE_900, 12.0))
    .padding(12.0)
    .width(Length::Fill);

    container(
        column![
            detail_header("Sauerstoff", "Letzte 30 Minuten", style::CYAN_400),
            container(chart).height(Length::Fill).center_y(),
            container(warning).padding(12.0),
        ],
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(style::panel(style::SLATE_950, 0.0))
    .into()
}
