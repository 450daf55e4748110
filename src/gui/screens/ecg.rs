use iced::{Element, Length, Point, Rectangle, Renderer, Theme};
use iced::mouse;
use iced::widget::{canvas, column, container, row, Canvas};
use iced::widget::canvas::{Frame, Geometry, LineCap, Path, Stroke};

use crate::gui::screens::{detail_header, stat_card};
use crate::gui::style;
use crate::gui::types::Message;
use crate::vitals;
use crate::waveform::{WaveformSweep, CANVAS_HEIGHT, CANVAS_WIDTH};

const GRID_SPACING: f32 = 20.0;

struct EcgTrace<'a> {
    sweep: &'a WaveformSweep,
}

impl<'a> canvas::Program<Message> for EcgTrace<'a> {
    type State = ();

    fn draw(&self, _state: &(), renderer: &Renderer, _theme: &Theme, bounds: Rectangle, _cursor: mouse::Cursor) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        let grid = Path::new(|b| {
            let mut gx = 0.0;
            while gx <= bounds.width {
                b.move_to(Point::new(gx, 0.0));
                b.line_to(Point::new(gx, bounds.height));
                gx += GRID_SPACING;
            }

            let mut gy = 0.0;
            while gy <= bounds.height {
                b.move_to(Point::new(0.0, gy));
                b.line_to(Point::new(bounds.width, gy));
                gy += GRID_SPACING;
            }
        });
        frame.stroke(&grid, Stroke::default().with_color(style::with_alpha(style::GRID_GRAY, 0.4)).with_width(1.0));

        let points = self.sweep.trace();
        if points.len() > 1 {
            let trace = Path::new(|b| {
                b.move_to(Point::new(points[0].0, points[0].1));
                for &(x, y) in &points[1..] {
                    b.line_to(Point::new(x, y));
                }
            });

            let stroke = Stroke {
                line_cap: LineCap::Round,
                ..Stroke::default().with_color(style::GREEN_400).with_width(2.0)
            };
            frame.stroke(&trace, stroke);
        }

        vec![frame.into_geometry()]
    }
}

pub fn view(sweep: &WaveformSweep) -> Element<'_, Message> {
    let trace = container(
        Canvas::new(EcgTrace { sweep })
            .width(Length::Fixed(CANVAS_WIDTH))
            .height(Length::Fixed(CANVAS_HEIGHT)),
    )
    .style(style::panel(style::SLATE_900, 0.0))
    .width(Length::Fill)
    .center_x()
    .padding([14.0, 0.0]);

    let stats = row![
        stat_card(
            "HF",
            vitals::CURRENT.heart_rate_bpm.to_string(),
            style::RED_500,
            "Tachykardie",
            style::SLATE_500,
        ),
        stat_card(
            "QTC",
            vitals::QTC_MS.to_string(),
            style::GREEN_400,
            "Normal",
            style::SLATE_500,
        ),
    ]
    .spacing(12)
    .padding(14.0);

    container(
        column![
            detail_header("Live EKG", "Ableitung II • 25mm/s", style::GREEN_400),
            trace,
            stats,
        ]
        .spacing(4),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(style::panel(style::SLATE_950, 0.0))
    .into()
}
