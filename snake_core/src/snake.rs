use std::collections::VecDeque;

use crate::{Coordinate, Direction};

pub type MoveFn = Box<dyn Fn(Coordinate, Direction) -> Coordinate + Send>;

const INITIAL_LENGTH: usize = 3;

pub struct Snake {
    segments: VecDeque<Coordinate>,
    direction: Direction,
    collision: bool,
    move_fn: MoveFn,
}

impl Snake {
    pub fn new(initial_head: Coordinate, move_fn: MoveFn) -> Self {
        let mut segments = VecDeque::with_capacity(INITIAL_LENGTH);
        let mut segment = initial_head;
        segments.push_back(segment);
        for _ in 1..INITIAL_LENGTH {
            segment = move_fn(segment, Direction::Left);
            segments.push_back(segment);
        }

        Self {
            segments,
            direction: Direction::Right,
            collision: false,
            move_fn,
        }
    }

    pub fn head(&self) -> Coordinate {
        *self.segments.front().expect("Snake segments should never be empty")
    }

    pub fn segments(&self) -> &VecDeque<Coordinate> {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn no_collision_detected(&self) -> bool {
        !self.collision
    }

    pub fn advance(&mut self) {
        let next = self.next_head_position();
        self.segments.push_front(next);
        self.segments.pop_back();
    }

    pub fn grow(&mut self) {
        let next = self.next_head_position();
        self.segments.push_front(next);
    }

    pub fn turn_left(&mut self) {
        self.direction = self.direction.turn(Direction::Left);
    }

    pub fn turn_right(&mut self) {
        self.direction = self.direction.turn(Direction::Right);
    }

    pub fn turn_up(&mut self) {
        self.direction = self.direction.turn(Direction::Up);
    }

    pub fn turn_down(&mut self) {
        self.direction = self.direction.turn(Direction::Down);
    }

    // The tail cell still counts as occupied when the next head lands on it.
    fn next_head_position(&mut self) -> Coordinate {
        let next = (self.move_fn)(self.head(), self.direction);
        self.collision = self.segments.contains(&next);
        next
    }
}
