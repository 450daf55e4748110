use iced::{Alignment, Color, Element, Length, Point, Rectangle, Renderer, Theme};
use iced::mouse;
use iced::theme;
use iced::widget::{canvas, column, container, row, text, Canvas, Space};
use iced::widget::canvas::{Frame, Geometry, LineCap, LineDash, Path, Stroke};

use crate::gui::screens::detail_header;
use crate::gui::style;
use crate::gui::types::Message;

// 24h course in the source's chart coordinates (100 wide, 50 high; y 0 is
// 38.5° and y 50 is 36.5°), as two cubic segments ending at the current
// 38.1° reading.
const CHART_WIDTH: f32 = 100.0;
const CHART_HEIGHT: f32 = 50.0;
const CURVE_START: (f32, f32) = (0.0, 42.0);
const CURVE_SEGMENTS: [[(f32, f32); 3]; 2] = [
    [(25.0, 42.0), (45.0, 38.0), (65.0, 20.0)],
    [(85.0, 2.0), (90.0, 8.0), (100.0, 5.0)],
];

struct CourseChart;

impl canvas::Program<Message> for CourseChart {
    type State = ();

    fn draw(&self, _state: &(), renderer: &Renderer, _theme: &Theme, bounds: Rectangle, _cursor: mouse::Cursor) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let scale = |(x, y): (f32, f32)| {
            Point::new(x / CHART_WIDTH * bounds.width, y / CHART_HEIGHT * bounds.height)
        };

        let dashed = Stroke {
            line_dash: LineDash { segments: &[3.0, 3.0], offset: 0 },
            ..Stroke::default().with_color(style::SLATE_700).with_width(0.5)
        };
        for gridline in [10.0, 30.0] {
            let path = Path::line(scale((0.0, gridline)), scale((CHART_WIDTH, gridline)));
            frame.stroke(&path, dashed.clone());
        }

        let area = Path::new(|b| {
            b.move_to(scale(CURVE_START));
            for [c1, c2, end] in CURVE_SEGMENTS {
                b.bezier_curve_to(scale(c1), scale(c2), scale(end));
            }
            b.line_to(scale((CHART_WIDTH, CHART_HEIGHT)));
            b.line_to(scale((0.0, CHART_HEIGHT)));
            b.close();
        });
        frame.fill(&area, style::with_alpha(style::RED_500, 0.15));

        let course = Path::new(|b| {
            b.move_to(scale(CURVE_START));
            for [c1, c2, end] in CURVE_SEGMENTS {
                b.bezier_curve_to(scale(c1), scale(c2), scale(end));
            }
        });
        let stroke = Stroke {
            line_cap: LineCap::Round,
            ..Stroke::default().with_color(style::RED_500).with_width(1.5)
        };
        frame.stroke(&course, stroke);

        let current_point = scale(CURVE_SEGMENTS[CURVE_SEGMENTS.len() - 1][2]);
        let current = Path::circle(current_point, 3.0);
        frame.fill(&current, style::RED_500);
        frame.stroke(&current, Stroke::default().with_color(Color::WHITE).with_width(1.0));

        vec![frame.into_geometry()]
    }
}

pub fn view() -> Element<'static, Message> {
    let axis_labels = column![
        text("38.5°").size(9).style(theme::Text::Color(style::SLATE_500)),
        Space::with_height(Length::Fill),
        text("37.5°").size(9).style(theme::Text::Color(style::SLATE_500)),
        Space::with_height(Length::Fill),
        text("36.5°").size(9).style(theme::Text::Color(style::SLATE_500)),
    ]
    .height(Length::Fixed(120.0));

    let chart = column![
        row![
            Canvas::new(CourseChart)
                .width(Length::Fill)
                .height(Length::Fixed(120.0)),
            axis_labels,
        ]
        .spacing(6)
        .align_items(Alignment::Center),

        row![
            text("-24h").size(10).style(theme::Text::Color(style::SLATE_500)),
            Space::with_width(Length::Fill),
            text("-12h").size(10).style(theme::Text::Color(style::SLATE_500)),
            Space::with_width(Length::Fill),
            text("Jetzt").size(10).style(theme::Text::Color(style::SLATE_500)),
        ],
    ]
    .spacing(10)
    .padding([0.0, 16.0]);

    let note = container(
        column![
            row![
                text("Fieber Anstieg").size(13).style(theme::Text::Color(style::SLATE_300)),
                Space::with_width(Length::Fill),
                text("↑").size(14).style(theme::Text::Color(style::RED_500)),
            ],
            text("Temperatur ist in den letzten 4 Stunden um 1.2°C gestiegen. Kühlung vorbereiten.")
                .size(11)
                .style(theme::Text::Color(style::SLATE_400)),
        ]
        .spacing(4),
    )
    .style(style::bordered_panel(style::SLATE_900, style::RED_500, 12.0))
    .padding(12.0)
    .width(Length::Fill);

    container(
        column![
            detail_header("Temperatur", "Letzte 24h", style::SLATE_300),
            container(chart).height(Length::Fill).center_y(),
            container(note).padding(12.0),
        ],
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(style::panel(style::SLATE_950, 0.0))
    .into()
}
