/// A top-level OS window, valid only until the window closes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowHandle {
    pub id: u32,
    pub process_id: u32,
    pub is_visible: bool,
    pub title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowRectangle {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl WindowRectangle {
    pub fn from_origin_and_size(x_position: i32, y_position: i32, width: u32, height: u32) -> Self {
        Self {
            left: x_position,
            top: y_position,
            right: x_position.saturating_add(width as i32),
            bottom: y_position.saturating_add(height as i32),
        }
    }

    pub fn width(&self) -> u32 {
        (self.right - self.left).max(0) as u32
    }

    pub fn height(&self) -> u32 {
        (self.bottom - self.top).max(0) as u32
    }
}
