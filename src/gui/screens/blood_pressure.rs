use iced::{Color, Element, Length, Point, Rectangle, Renderer, Size, Theme};
use iced::alignment::Horizontal;
use iced::mouse;
use iced::widget::{canvas, column, container, row, Canvas};
use iced::widget::canvas::{Frame, Geometry, LineDash, Path, Stroke};

use crate::gui::screens::{detail_header, stat_card};
use crate::gui::style;
use crate::gui::types::Message;
use crate::vitals::{BP_TREND, MAP_MMHG, PULSE_PRESSURE_MMHG};

// Chart coordinates from the source: 185 wide, 100 high, with the value
// axis spanning 80 mmHg (y 80) to 160 mmHg (y 20).
const CHART_WIDTH: f32 = 185.0;
const CHART_HEIGHT: f32 = 100.0;
const BAR_WIDTH: f32 = 16.0;
const BAR_OFFSETS: [f32; 4] = [20.0, 55.0, 90.0, 125.0];
const BAR_ALPHAS: [f32; 4] = [0.6, 0.8, 1.0, 1.0];

fn value_y(mmhg: u16) -> f32 {
    50.0 + (120.0 - mmhg as f32) * 0.75
}

struct RangeBars;

impl canvas::Program<Message> for RangeBars {
    type State = ();

    fn draw(&self, _state: &(), renderer: &Renderer, _theme: &Theme, bounds: Rectangle, _cursor: mouse::Cursor) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let sx = bounds.width / CHART_WIDTH;
        let sy = bounds.height / CHART_HEIGHT;

        let dashed = Stroke {
            line_dash: LineDash { segments: &[4.0, 4.0], offset: 0 },
            ..Stroke::default().with_color(style::SLATE_700).with_width(0.5)
        };
        for (gridline, label) in [(20.0, "160"), (50.0, "120"), (80.0, "80")] {
            let path = Path::line(
                Point::new(0.0, gridline * sy),
                Point::new(160.0 * sx, gridline * sy),
            );
            frame.stroke(&path, dashed.clone());

            frame.fill_text(canvas::Text {
                content: label.to_string(),
                position: Point::new(165.0 * sx, (gridline + 2.0) * sy),
                color: style::SLATE_500,
                size: 8.0.into(),
                ..canvas::Text::default()
            });
        }

        let last = BP_TREND.len() - 1;
        for (index, sample) in BP_TREND.iter().enumerate() {
            let top = value_y(sample.systolic_mmhg);
            let bottom = value_y(sample.diastolic_mmhg);
            let x = BAR_OFFSETS[index];
            let center = x + BAR_WIDTH / 2.0;
            let current = index == last;

            let bar = Path::rectangle(
                Point::new(x * sx, top * sy),
                Size::new(BAR_WIDTH * sx, (bottom - top) * sy),
            );
            frame.fill(&bar, style::with_alpha(style::ORANGE_400, BAR_ALPHAS[index]));
            if current {
                frame.stroke(&bar, Stroke::default().with_color(Color::WHITE).with_width(1.0));
            }

            let label_color = |muted: Color| if current { Color::WHITE } else { muted };
            frame.fill_text(canvas::Text {
                content: sample.systolic_mmhg.to_string(),
                position: Point::new(center * sx, (top - 8.0) * sy),
                color: label_color(style::ORANGE_200),
                size: 8.0.into(),
                horizontal_alignment: Horizontal::Center,
                ..canvas::Text::default()
            });
            frame.fill_text(canvas::Text {
                content: sample.diastolic_mmhg.to_string(),
                position: Point::new(center * sx, (bottom + 2.0) * sy),
                color: label_color(style::SLATE_400),
                size: 8.0.into(),
                horizontal_alignment: Horizontal::Center,
                ..canvas::Text::default()
            });
            frame.fill_text(canvas::Text {
                content: sample.label.to_string(),
                position: Point::new(center * sx, 90.0 * sy),
                color: if current { style::ORANGE_400 } else { style::SLATE_500 },
                size: 8.0.into(),
                horizontal_alignment: Horizontal::Center,
                ..canvas::Text::default()
            });
        }

        vec![frame.into_geometry()]
    }
}

pub fn view() -> Element<'static, Message> {
    let chart = container(
        Canvas::new(RangeBars)
            .width(Length::Fill)
            .height(Length::Fixed(160.0)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_y()
    .padding([0.0, 16.0]);

    let cards = row![
        stat_card(
            "MAP",
            MAP_MMHG.to_string(),
            Color::WHITE,
            "Kritisch Hoch",
            style::ORANGE_400,
        ),
        stat_card(
            "PULSDRUCK",
            PULSE_PRESSURE_MMHG.to_string(),
            style::SLATE_200,
            "mmHg (Erweitert)",
            style::SLATE_500,
        ),
    ]
    .spacing(12)
    .padding([8.0, 12.0, 18.0, 12.0]);

    container(
        column![
            detail_header("Blutdruck", "Trend • Letzte 15 Min", style::ORANGE_400),
            chart,
            cards,
        ],
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(style::panel(style::SLATE_950, 0.0))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_axis_matches_the_source_chart() {
        assert_eq!(value_y(160), 20.0);
        assert_eq!(value_y(120), 50.0);
        assert_eq!(value_y(80), 80.0);
    }

    #[test]
    fn bars_span_systolic_down_to_diastolic() {
        for sample in BP_TREND {
            assert!(value_y(sample.systolic_mmhg) < value_y(sample.diastolic_mmhg));
        }
    }
}
