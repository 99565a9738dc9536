use std::collections::HashSet;

use crate::log;
use crate::snake::{MoveFn, Snake};
use crate::{Coordinate, Direction, WorldRng, WorldSettings};

const MAX_FOOD_COUNT: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

pub struct World {
    settings: WorldSettings,
    snake: Snake,
    food: HashSet<Coordinate>,
    paused: bool,
    listeners: Vec<(ListenerId, Box<dyn FnMut() + Send>)>,
    next_listener_id: u64,
    rng: WorldRng,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    pub fn new() -> Self {
        Self::with_settings(WorldSettings::default(), WorldRng::from_random())
            .expect("Default settings should always be valid")
    }

    pub fn with_settings(settings: WorldSettings, rng: WorldRng) -> Result<Self, String> {
        settings.validate()?;

        let snake = Self::initial_snake(&settings);
        let mut world = Self {
            settings,
            snake,
            food: HashSet::new(),
            paused: false,
            listeners: Vec::new(),
            next_listener_id: 0,
            rng,
        };
        world.food = world.create_food();
        Ok(world)
    }

    pub fn width(&self) -> i32 {
        self.settings.width
    }

    pub fn height(&self) -> i32 {
        self.settings.height
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn set_snake(&mut self, snake: Snake) {
        self.snake = snake;
    }

    pub fn food(&self) -> &HashSet<Coordinate> {
        &self.food
    }

    pub fn set_food(&mut self, food: HashSet<Coordinate>) {
        self.food = food;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn no_collision_detected(&self) -> bool {
        self.snake.no_collision_detected()
    }

    pub fn pulse(&mut self) {
        if self.paused {
            return;
        }

        // Food is checked under the current head, before any movement.
        let head = self.snake.head();
        if self.food.contains(&head) {
            self.food.remove(&head);
            self.snake.grow();
            log!(
                "Snake ate food at ({}, {}). Length: {}",
                head.x,
                head.y,
                self.snake.len()
            );
            if self.food.is_empty() {
                self.food = self.create_food();
            }
        } else {
            self.snake.advance();
        }

        self.notify_listeners();
    }

    pub fn on_left(&mut self) {
        self.snake.turn_left();
    }

    pub fn on_right(&mut self) {
        self.snake.turn_right();
    }

    pub fn on_up(&mut self) {
        self.snake.turn_up();
    }

    pub fn on_down(&mut self) {
        self.snake.turn_down();
    }

    pub fn moved(&self, coordinate: Coordinate, direction: Direction) -> Coordinate {
        coordinate
            .translated(direction)
            .flipped(self.settings.width, self.settings.height)
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn reset(&mut self) {
        self.snake = Self::initial_snake(&self.settings);
        self.paused = false;
        self.food = self.create_food();
    }

    pub fn add_listener<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut() + Send + 'static,
    {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn remove_listener(&mut self, id: ListenerId) {
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
    }

    fn initial_snake(settings: &WorldSettings) -> Snake {
        let width = settings.width;
        let height = settings.height;
        let move_fn: MoveFn = Box::new(move |coordinate, direction| {
            coordinate.translated(direction).flipped(width, height)
        });
        Snake::new(Coordinate::new(width / 2, height / 2), move_fn)
    }

    fn notify_listeners(&mut self) {
        for (_, listener) in self.listeners.iter_mut() {
            listener();
        }
    }

    // Cells are drawn over the whole field, so food may land under the
    // snake, and duplicate draws collapse into a single cell.
    fn create_food(&mut self) -> HashSet<Coordinate> {
        let count = self.rng.random_range(1..=MAX_FOOD_COUNT);
        let mut food = HashSet::new();
        for _ in 0..count {
            let coordinate = self.random_coordinate();
            if food.insert(coordinate) {
                log!("Food spawned at ({}, {})", coordinate.x, coordinate.y);
            }
        }
        food
    }

    fn random_coordinate(&mut self) -> Coordinate {
        let x = self.rng.random_range(0..self.settings.width);
        let y = self.rng.random_range(0..self.settings.height);
        Coordinate::new(x, y)
    }
}
