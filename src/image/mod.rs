pub mod io;
pub mod rgb;

pub use self::io::{load_rgb_image, save_gray_png, write_json_file};
pub use self::rgb::{FrameRgb, RgbFrameBuf};
