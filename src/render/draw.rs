use crate::game::{Apple, GameConfig, GameEngine, Position, Rgb, Snake};

use super::surface::{CellRect, Surface};

/// Something that can paint itself onto a surface
pub trait Draw {
    fn draw(&self, surface: &mut dyn Surface, config: &GameConfig);
}

fn draw_cell(surface: &mut dyn Surface, pos: Position, fill: Rgb, config: &GameConfig) {
    let rect = CellRect::new(pos, config.grid_size);
    surface.fill_rect(rect, fill);
    surface.outline_rect(rect, config.palette.border, 1);
}

impl Draw for Apple {
    fn draw(&self, surface: &mut dyn Surface, config: &GameConfig) {
        draw_cell(surface, self.position, config.palette.apple, config);
    }
}

impl Draw for Snake {
    fn draw(&self, surface: &mut dyn Surface, config: &GameConfig) {
        for &segment in &self.body {
            draw_cell(surface, segment, config.palette.snake, config);
        }
    }
}

/// Clear the surface and draw the apple, then the snake on top of it
pub fn draw_frame(engine: &GameEngine, surface: &mut dyn Surface) {
    let config = engine.config();
    surface.fill(config.palette.background);
    engine.apple.draw(surface, config);
    engine.snake.draw(surface, config);
}
