use glam::{Vec2, vec2};
use imageproc::drawing;
use imageproc::rect::Rect;
use lib_sim::Aabb;

const TRANSLATION_COUNT: usize = 10;
const OUT_IMG_WIDTH: u32 = 1024;
const OUT_IMG_HEIGHT: u32 = 1024;
const OUT_IMG_OFFSET: Vec2 = vec2(112.0, 312.0);

/// An interface for a test case. The result of every case must not
/// change if the whole scene gets moved by some offset.
pub trait TestCase: Copy {
    /// The name of the test to use in the test report.
    fn name(&self) -> &'static str;

    /// Run the test and return success of failure.
    /// If you have a super helpful problem to report that
    /// the calling code can't see -- print it to stdout.
    fn check(&self) -> bool;

    /// Draw a visual aid to `canvas`.
    fn draw(&self, canvas: &mut image::RgbImage);
}

pub trait FuzzableTestCase: TestCase + Copy {
    /// Move the whole scene by `offset`.
    fn translate(self, offset: Vec2) -> Self;
}

#[allow(dead_code)]
pub fn run_tests_no_fuzz<T: TestCase>(tests: impl IntoIterator<Item = T>) {
    for case in tests.into_iter() {
        println!("Running {:?}", case.name());
        if !case.check() {
            draw_test(&case);
            panic!("Test {:?} failed. Visual aid dumped.", case.name());
        }
    }
}

#[allow(dead_code)]
pub fn run_tests<T: FuzzableTestCase>(tests: impl IntoIterator<Item = T>) {
    let extended = tests.into_iter().flat_map(translate_test);
    for case in extended {
        println!("Running {:?}", case.name());
        if !case.check() {
            draw_test(&case);
            panic!("Test {:?} failed. Visual aid dumped.", case.name());
        }
    }
}

/// Generates a few copies of the same test, each moved by a random offset.
fn translate_test<T: FuzzableTestCase>(case: T) -> impl IntoIterator<Item = T> {
    let original_case = case;
    let cases =
        std::iter::repeat_n(case, TRANSLATION_COUNT).map(|case| case.translate(random_offset()));
    std::iter::once(original_case).chain(cases)
}

fn random_offset() -> Vec2 {
    let x_increment = rand::random_range(-3..3);
    let y_increment = rand::random_range(-3..3);

    vec2(x_increment as f32 * 16.0, y_increment as f32 * 16.0)
}

fn draw_test<T: TestCase>(case: &T) {
    let mut img = image::RgbImage::new(OUT_IMG_WIDTH, OUT_IMG_HEIGHT);
    img.fill(0);
    case.draw(&mut img);
    img.save_with_format("test-out.png", image::ImageFormat::Png)
        .unwrap();
}

#[allow(dead_code)]
pub fn draw_aabb(canvas: &mut image::RgbImage, color: image::Rgb<u8>, aabb: Aabb) {
    let min = aabb.min + OUT_IMG_OFFSET;
    let size = aabb.size().max(Vec2::ONE);
    let rect = Rect::at(min.x as i32, min.y as i32).of_size(size.x as u32, size.y as u32);

    drawing::draw_hollow_rect_mut(canvas, rect, color);
}
