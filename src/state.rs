use crate::config::SIGHTING_TTL;
use crate::map::TileMap;
use crate::obs::{Ship, ShipId};
use crate::point::{Direction, Point};
use ahash::AHashMap;
use oorandom::Rand32;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Role {
    Explore,
    Attack,
    Defend,
}

/// Which of the two players we are, latched from the home planet's x
/// coordinate on the first observation and trusted for the whole match.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Side {
    First,
    Second,
}

impl Side {
    /// Occupation value of a planet fully owned by this side.
    pub fn owned_occupation(self) -> i32 {
        match self {
            Side::First => 0,
            Side::Second => 100,
        }
    }
}

/// Cyclic wander movement of one exploring ship: mostly `primary`, sometimes
/// `secondary`, weights controlling the duty cycle.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct WanderPattern {
    pub primary: Direction,
    pub secondary: Direction,
    pub primary_weight: u32,
    pub secondary_weight: u32,
    pub bumps: u32,
}

impl WanderPattern {
    /// The three archetypes handed out round-robin: mostly-horizontal,
    /// mostly-vertical, diagonal. Mirrored so ships head away from home.
    pub fn archetype(seq: u32, side: Side) -> Self {
        let (horizontal, vertical) = match side {
            Side::First => (Direction::Right, Direction::Down),
            Side::Second => (Direction::Left, Direction::Up),
        };
        match seq % 3 {
            0 => Self {
                primary: horizontal,
                secondary: vertical,
                primary_weight: 3,
                secondary_weight: 1,
                bumps: 0,
            },
            1 => Self {
                primary: vertical,
                secondary: horizontal,
                primary_weight: 3,
                secondary_weight: 1,
                bumps: 0,
            },
            _ => Self {
                primary: horizontal,
                secondary: vertical,
                primary_weight: 1,
                secondary_weight: 1,
                bumps: 0,
            },
        }
    }

    /// Direction for this turn, keyed off the weighted cycle.
    pub fn direction_at(&self, turn: u32, ship_id: ShipId) -> Direction {
        let cycle = self.primary_weight + self.secondary_weight;
        if (turn + ship_id) % cycle < self.primary_weight {
            self.primary
        } else {
            self.secondary
        }
    }

    /// Reflect off a board edge: flip whichever stored direction runs along
    /// the violated axis.
    pub fn bounce(&mut self, horizontal_axis: bool) {
        if self.primary.is_horizontal() == horizontal_axis {
            self.primary = self.primary.flipped();
        } else {
            self.secondary = self.secondary.flipped();
        }
        self.bumps += 1;
    }
}

#[derive(Debug, Copy, Clone)]
struct Sighting {
    pos: Point,
    seen_at: u32,
}

/// All cross-step mutable state of one agent instance. Initialized empty at
/// construction, updated once per step, purged of vanished ship ids.
#[derive(Debug)]
pub struct MatchState {
    pub turn: u32,
    pub home: Option<Point>,
    pub enemy_home: Option<Point>,
    pub side: Option<Side>,
    pub roles: AHashMap<ShipId, Role>,
    pub patterns: AHashMap<ShipId, WanderPattern>,
    sightings: AHashMap<ShipId, Sighting>,
    pub rng: Rand32,
    pattern_seq: u32,
}

impl MatchState {
    pub fn new(seed: u64) -> Self {
        Self {
            turn: 0,
            home: None,
            enemy_home: None,
            side: None,
            roles: AHashMap::new(),
            patterns: AHashMap::new(),
            sightings: AHashMap::new(),
            rng: Rand32::new(seed),
            pattern_seq: 0,
        }
    }

    /// Latch home, side and the mirrored enemy home from the first planet we
    /// ever see. A heuristic guess, but a standing one: never recomputed.
    pub fn latch_home(&mut self, home: Point, map: &TileMap) {
        assert!(self.home.is_none(), "home already latched");
        let side = if home.x == crate::config::FIRST_PLAYER_HOME_X {
            Side::First
        } else {
            Side::Second
        };
        let mirror = Point::new(map.width() - 1 - home.x, map.height() - 1 - home.y);
        log::info!("home latched at {home} ({side:?}), enemy home assumed at {mirror}");
        self.home = Some(home);
        self.enemy_home = Some(mirror);
        self.side = Some(side);
    }

    pub fn home_or_center(&self, map: &TileMap) -> Point {
        self.home.unwrap_or_else(|| map.center())
    }

    pub fn enemy_home_or_center(&self, map: &TileMap) -> Point {
        self.enemy_home.unwrap_or_else(|| map.center())
    }

    /// Drop role/pattern entries of ships that no longer exist.
    pub fn purge_missing(&mut self, roster: &[Ship]) {
        self.roles.retain(|id, _| roster.iter().any(|s| s.id == *id));
        self.patterns
            .retain(|id, _| self.roles.contains_key(id));
    }

    pub fn assign_role(&mut self, id: ShipId, role: Role) {
        self.roles.insert(id, role);
        if role != Role::Explore {
            self.patterns.remove(&id);
        }
    }

    /// Lazily created wander pattern; archetypes rotate per created pattern.
    pub fn pattern_for(&mut self, id: ShipId) -> &mut WanderPattern {
        if !self.patterns.contains_key(&id) {
            let side = self.side.unwrap_or(Side::First);
            let pattern = WanderPattern::archetype(self.pattern_seq, side);
            self.pattern_seq += 1;
            self.patterns.insert(id, pattern);
        }
        self.patterns.get_mut(&id).unwrap()
    }

    /// Refresh last-seen positions of visible enemies and forget stale ones.
    pub fn track_enemies(&mut self, enemy_ships: &[Ship]) {
        for e in enemy_ships {
            self.sightings.insert(
                e.id,
                Sighting {
                    pos: e.position(),
                    seen_at: self.turn,
                },
            );
        }
        let turn = self.turn;
        self.sightings
            .retain(|_, s| turn - s.seen_at <= SIGHTING_TTL);
    }

    pub fn nearest_sighting(&self, from: Point, max_dist: i32) -> Option<Point> {
        self.sightings
            .values()
            .map(|s| s.pos)
            .filter(|p| p.manhattan_distance(from) <= max_dist)
            .min_by_key(|p| p.manhattan_distance(from))
    }

    /// Uniform random cardinal direction.
    pub fn roll_direction(&mut self) -> Direction {
        Direction::ALL[self.rng.rand_range(0..4) as usize]
    }

    /// Uniform random offset in [-amount, amount].
    pub fn roll_jitter(&mut self, amount: i32) -> i32 {
        self.rng.rand_range(0..(2 * amount + 1) as u32) as i32 - amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::ship;

    #[test]
    fn latch_mirrors_across_center() {
        let map = TileMap::filled(100, 100, 0);
        let mut state = MatchState::new(1);
        state.latch_home(Point::new(9, 9), &map);
        assert_eq!(state.side, Some(Side::First));
        assert_eq!(state.enemy_home, Some(Point::new(90, 90)));

        let mut state = MatchState::new(1);
        state.latch_home(Point::new(90, 90), &map);
        assert_eq!(state.side, Some(Side::Second));
        assert_eq!(state.enemy_home, Some(Point::new(9, 9)));
    }

    #[test]
    fn purge_drops_vanished_ships() {
        let mut state = MatchState::new(1);
        state.assign_role(1, Role::Explore);
        state.assign_role(2, Role::Defend);
        state.pattern_for(1);
        state.purge_missing(&[ship(2, 0, 0)]);
        assert!(!state.roles.contains_key(&1));
        assert!(!state.patterns.contains_key(&1));
        assert_eq!(state.roles.get(&2), Some(&Role::Defend));
    }

    #[test]
    fn role_change_discards_pattern() {
        let mut state = MatchState::new(1);
        state.assign_role(5, Role::Explore);
        state.pattern_for(5);
        state.assign_role(5, Role::Attack);
        assert!(!state.patterns.contains_key(&5));
    }

    #[test]
    fn patterns_rotate_archetypes() {
        let mut state = MatchState::new(1);
        state.side = Some(Side::First);
        let a = *state.pattern_for(1);
        let b = *state.pattern_for(2);
        let c = *state.pattern_for(3);
        let d = *state.pattern_for(4);
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_eq!(a, d);
        // Mostly-horizontal, first player: push right
        assert_eq!(a.primary, Direction::Right);
        assert_eq!(a.primary_weight, 3);
        // Diagonal cycles evenly
        assert_eq!(c.primary_weight, c.secondary_weight);
    }

    #[test]
    fn weighted_cycle_alternates() {
        let pattern = WanderPattern::archetype(0, Side::First);
        // 3:1 duty cycle keyed on turn + id
        let dirs: Vec<_> = (0..8).map(|turn| pattern.direction_at(turn, 0)).collect();
        assert_eq!(
            dirs.iter().filter(|d| **d == Direction::Right).count(),
            6
        );
        assert_eq!(dirs[3], Direction::Down);
        assert_eq!(dirs[7], Direction::Down);
    }

    #[test]
    fn bounce_flips_violated_axis_only() {
        let mut pattern = WanderPattern::archetype(0, Side::First);
        pattern.bounce(true);
        assert_eq!(pattern.primary, Direction::Left);
        assert_eq!(pattern.secondary, Direction::Down);
        assert_eq!(pattern.bumps, 1);
        pattern.bounce(false);
        assert_eq!(pattern.secondary, Direction::Up);
        assert_eq!(pattern.bumps, 2);
    }

    #[test]
    fn sightings_expire() {
        let mut state = MatchState::new(1);
        state.turn = 10;
        state.track_enemies(&[ship(77, 30, 30)]);
        assert_eq!(
            state.nearest_sighting(Point::new(30, 32), 5),
            Some(Point::new(30, 30))
        );
        state.turn = 10 + SIGHTING_TTL + 1;
        state.track_enemies(&[]);
        assert_eq!(state.nearest_sighting(Point::new(30, 32), 5), None);
    }

    #[test]
    fn jitter_is_bounded() {
        let mut state = MatchState::new(7);
        for _ in 0..100 {
            let j = state.roll_jitter(2);
            assert!((-2..=2).contains(&j));
        }
    }
}
