use doodleboard::draw::{Color, RED, Surface};
use doodleboard::host::{Container, ResizeObserver};
use doodleboard::input::PointerEvent;
use doodleboard::util::{Bounds, Point};
use doodleboard::{DrawingBoard, ToolMode};

/// Host element that reports wherever the layout last put it.
struct Panel {
    rect: Bounds,
}

impl Container for Panel {
    fn bounding_rect(&self) -> Bounds {
        self.rect
    }
}

fn mounted_board(width: f64, height: f64) -> DrawingBoard {
    let panel = Panel {
        rect: Bounds::new(0.0, 0.0, width, height),
    };
    let mut board = DrawingBoard::new();
    board.initialize(&panel);
    board
}

fn opaque_pixels(surface: &mut Surface) -> usize {
    let (width, height) = surface.dimensions().unwrap_or_default();
    let mut count = 0;
    for y in 0..height {
        for x in 0..width {
            if surface.pixel(x, y).is_some_and(|p| p.a == 255) {
                count += 1;
            }
        }
    }
    count
}

#[test]
fn diagonal_stroke_is_visible_until_cleared() {
    let mut board = mounted_board(400.0, 300.0);
    assert_eq!(board.surface().dimensions(), Some((400, 300)));
    board.set_mode(ToolMode::Paint);
    board.begin_stroke(Point::new(10.0, 10.0));
    board.extend_stroke(Point::new(50.0, 50.0));
    board.end_stroke();

    let surface = board.surface_mut();
    for i in 12..48 {
        let pixel = surface.pixel(i, i).unwrap();
        assert_eq!(pixel.a, 255, "diagonal gap at {i}");
        assert_eq!((pixel.r, pixel.g, pixel.b), (0, 0, 0));
    }
    // Width 3 line: nothing a few pixels off the diagonal
    assert!(surface.pixel(30, 36).unwrap().is_transparent());
    assert!(surface.pixel(36, 30).unwrap().is_transparent());
    assert!(surface.pixel(60, 60).unwrap().is_transparent());

    board.clear_surface();
    assert!(board.surface_mut().is_blank());
    assert_eq!(opaque_pixels(board.surface_mut()), 0);
}

#[test]
fn stroke_uses_configured_color_and_width() {
    let mut board = mounted_board(120.0, 60.0);
    board.set_color(RED);
    board.set_brush_width(9);
    board.set_mode(ToolMode::Paint);
    board.begin_stroke(Point::new(20.0, 30.0));
    board.extend_stroke(Point::new(100.0, 30.0));
    board.end_stroke();

    let surface = board.surface_mut();
    let center = surface.pixel(60, 30).unwrap();
    assert_eq!(center.a, 255);
    assert!((center.r as i32 - 0xe5).abs() <= 1);
    assert!((center.g as i32 - 0x3e).abs() <= 1);
    assert!((center.b as i32 - 0x3e).abs() <= 1);

    // Half width 4.5 around y = 30
    assert_eq!(surface.pixel(60, 26).unwrap().a, 255);
    assert_eq!(surface.pixel(60, 33).unwrap().a, 255);
    assert!(surface.pixel(60, 22).unwrap().is_transparent());
    assert!(surface.pixel(60, 38).unwrap().is_transparent());
}

#[test]
fn wider_brush_covers_more_pixels() {
    let mut coverage = Vec::new();
    for width in [1, 5, 20] {
        let mut board = mounted_board(200.0, 100.0);
        board.set_brush_width(width);
        board.set_mode(ToolMode::Paint);
        board.begin_stroke(Point::new(40.0, 50.0));
        board.extend_stroke(Point::new(160.0, 50.0));
        board.end_stroke();
        coverage.push(opaque_pixels(board.surface_mut()));
    }
    assert!(coverage[0] < coverage[1] && coverage[1] < coverage[2], "{coverage:?}");
}

#[test]
fn erase_stroke_clears_painted_pixels() {
    let mut board = mounted_board(200.0, 200.0);
    board.set_color(Color::from_rgb8(0x80, 0x5a, 0xd5));
    board.set_brush_width(6);
    board.set_mode(ToolMode::Paint);
    board.on_pointer_down(&PointerEvent::mouse(20.0, 100.0));
    board.on_pointer_move(&PointerEvent::mouse(100.0, 100.0));
    board.on_pointer_move(&PointerEvent::mouse(180.0, 100.0));
    board.on_pointer_up();
    assert!(opaque_pixels(board.surface_mut()) > 0);

    board.set_mode(ToolMode::Erase);
    board.set_brush_width(20);
    board.on_pointer_down(&PointerEvent::mouse(20.0, 100.0));
    board.on_pointer_move(&PointerEvent::mouse(180.0, 100.0));
    board.on_pointer_leave();

    assert!(board.surface_mut().is_blank());
}

#[test]
fn resize_observer_replaces_buffer() {
    let mut board = mounted_board(300.0, 200.0);
    board.set_mode(ToolMode::Paint);
    board.begin_stroke(Point::new(0.0, 0.0));
    board.extend_stroke(Point::new(299.0, 199.0));
    board.end_stroke();
    assert!(!board.surface_mut().is_blank());

    let observer: &mut dyn ResizeObserver = &mut board;
    observer.on_resize(Bounds::new(0.0, 0.0, 123.0, 45.0));

    assert_eq!(board.surface().dimensions(), Some((123, 45)));
    assert!(board.surface_mut().is_blank());
}
