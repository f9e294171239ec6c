/// Pannable view onto the board
///
/// `x`/`y` is the world-space point drawn at the screen centre. Only
/// [`Camera::move_by_input`] and [`Camera::recentre`] change it; grid logic
/// never reads the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub x: f32,
    pub y: f32,
    centre_x: f32,
    centre_y: f32,
    /// Pan speed in world pixels per second
    pub speed: f32,
}

impl Camera {
    pub fn new(x: f32, y: f32, centre_x: f32, centre_y: f32, speed: f32) -> Self {
        Camera {
            x,
            y,
            centre_x,
            centre_y,
            speed,
        }
    }

    /// Pans along `(input_x, input_y)` for `delta_time` seconds.
    ///
    /// The input is expected to be a unit vector (or zero for no movement).
    pub fn move_by_input(&mut self, delta_time: f32, input_x: f32, input_y: f32) {
        self.x += input_x * self.speed * delta_time;
        self.y += input_y * self.speed * delta_time;
    }

    pub fn recentre(&mut self) {
        self.x = 0.0;
        self.y = 0.0;
    }

    pub fn world_to_screen(&self, world_x: f32, world_y: f32) -> (f32, f32) {
        (world_x - self.x + self.centre_x, world_y - self.y + self.centre_y)
    }

    pub fn screen_to_world(&self, screen_x: f32, screen_y: f32) -> (f32, f32) {
        (screen_x + self.x - self.centre_x, screen_y + self.y - self.centre_y)
    }
}
