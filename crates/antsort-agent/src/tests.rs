//! Unit tests for antsort-agent.
//!
//! The decision loop is stochastic, but two regimes are exact: a blank
//! memory makes pick-up certain (frequency 0 ⇒ probability 1) and put-down
//! impossible (probability 0), and marker-gradient ties resolve in
//! `Direction` declaration order.  The tests below steer into those regimes
//! so no assertion depends on a particular RNG draw.

#[cfg(test)]
mod helpers {
    use antsort_core::{AgentId, SimConfig};
    use antsort_world::World;

    use crate::{AgentRngs, AgentTable};

    /// Whole-second ticks so cooldown arithmetic stays exact in tests.
    pub fn config() -> SimConfig {
        SimConfig {
            tick_dt_secs: 1.0,
            ..SimConfig::default()
        }
    }

    /// A `size × size` world with one agent placed per entry of `positions`,
    /// plus matching blank agent state and seeded RNGs.
    pub fn fixture(size: usize, positions: &[(i32, i32)]) -> (World, AgentTable, AgentRngs) {
        let cfg = config();
        let mut world = World::new(size, size, positions.len());
        for (i, &(x, z)) in positions.iter().enumerate() {
            assert!(world.place_agent(AgentId(i as u32), x, z), "placement at {x},{z}");
        }
        let agents = AgentTable::new(positions.len(), cfg.memory_size);
        let rngs = AgentRngs::new(positions.len(), 42);
        (world, agents, rngs)
    }
}

#[cfg(test)]
mod memory {
    use antsort_core::ObjectKind;

    use crate::Memory;

    #[test]
    fn blank_memory_reports_zero_frequency() {
        let mem = Memory::new(10);
        assert_eq!(mem.capacity(), 10);
        for kind in ObjectKind::ALL {
            assert_eq!(mem.frequency(kind), 0.0);
        }
    }

    #[test]
    fn frequency_divides_by_capacity() {
        let mut mem = Memory::new(10);
        mem.record(Some(ObjectKind::A));
        // One hit out of ten slots, not one out of one seen.
        assert_eq!(mem.frequency(ObjectKind::A), 0.1);
        assert_eq!(mem.frequency(ObjectKind::B), 0.0);
    }

    #[test]
    fn record_evicts_the_oldest() {
        let mut mem = Memory::new(2);
        mem.record(Some(ObjectKind::A));
        mem.record(Some(ObjectKind::A));
        assert_eq!(mem.frequency(ObjectKind::A), 1.0);

        mem.record(Some(ObjectKind::B));
        assert_eq!(mem.frequency(ObjectKind::A), 0.5);
        assert_eq!(mem.frequency(ObjectKind::B), 0.5);
        assert_eq!(mem.capacity(), 2);
    }

    #[test]
    fn empty_sightings_displace_hits() {
        let mut mem = Memory::new(2);
        mem.record(Some(ObjectKind::C));
        mem.record(None);
        mem.record(None);
        assert_eq!(mem.frequency(ObjectKind::C), 0.0);
    }

    #[test]
    fn iter_is_newest_first() {
        let mut mem = Memory::new(3);
        mem.record(Some(ObjectKind::A));
        mem.record(Some(ObjectKind::B));
        let slots: Vec<_> = mem.iter().collect();
        assert_eq!(slots, vec![Some(ObjectKind::B), Some(ObjectKind::A), None]);
    }
}

#[cfg(test)]
mod probabilities {
    use crate::{pick_up_probability, put_down_probability};

    #[test]
    fn pick_up_is_certain_at_zero_frequency() {
        assert_eq!(pick_up_probability(0.1, 0.0), 1.0);
    }

    #[test]
    fn put_down_is_impossible_at_zero_frequency() {
        assert_eq!(put_down_probability(0.3, 0.0), 0.0);
    }

    #[test]
    fn pick_up_halves_exactly_when_frequency_equals_k() {
        // k / (k + k) = 1/2, squared.
        assert_eq!(pick_up_probability(0.1, 0.1), 0.25);
    }

    #[test]
    fn put_down_halves_exactly_when_frequency_equals_k() {
        assert_eq!(put_down_probability(0.3, 0.3), 0.25);
    }

    #[test]
    fn pick_up_decreases_with_abundance() {
        let lo = pick_up_probability(0.1, 0.1);
        let mid = pick_up_probability(0.1, 0.5);
        let hi = pick_up_probability(0.1, 1.0);
        assert!(lo > mid && mid > hi);
        assert!(hi > 0.0);
    }

    #[test]
    fn put_down_increases_with_abundance() {
        let lo = put_down_probability(0.3, 0.1);
        let mid = put_down_probability(0.3, 0.5);
        let hi = put_down_probability(0.3, 1.0);
        assert!(lo < mid && mid < hi);
        assert!(hi < 1.0);
    }
}

#[cfg(test)]
mod bonds {
    use antsort_core::{AgentId, ObjectKind};

    use crate::AgentTable;

    #[test]
    fn bind_is_mutual() {
        let mut agents = AgentTable::new(2, 4);
        agents.bind_help(AgentId(1), AgentId(0));
        assert_eq!(agents.helper[0], Some(AgentId(1)));
        assert_eq!(agents.assisting[1], Some(AgentId(0)));
        assert!(agents.has_helper(AgentId(0)));
        assert!(agents.is_helping(AgentId(1)));
    }

    #[test]
    fn release_clears_both_sides() {
        let mut agents = AgentTable::new(2, 4);
        agents.bind_help(AgentId(1), AgentId(0));
        agents.release_helper(AgentId(0));
        assert_eq!(agents.helper[0], None);
        assert_eq!(agents.assisting[1], None);
    }

    #[test]
    fn desert_clears_both_sides() {
        let mut agents = AgentTable::new(2, 4);
        agents.bind_help(AgentId(1), AgentId(0));
        agents.desert(AgentId(1));
        assert_eq!(agents.helper[0], None);
        assert_eq!(agents.assisting[1], None);
    }

    #[test]
    fn release_without_a_helper_is_a_noop() {
        let mut agents = AgentTable::new(1, 4);
        agents.release_helper(AgentId(0));
        assert_eq!(agents.helper[0], None);
    }

    #[test]
    fn asking_for_help_requires_heavy_timer_and_freedom() {
        let mut agents = AgentTable::new(2, 4);
        let a = AgentId(0);

        // Carrying nothing: not asking.
        assert!(!agents.is_asking_for_help(a));

        // Heavy load + running timer: asking.
        agents.carried[0] = Some(ObjectKind::C);
        agents.give_up_cooldown[0] = 5.0;
        assert!(agents.is_asking_for_help(a));

        // A light load never asks.
        agents.carried[0] = Some(ObjectKind::A);
        assert!(!agents.is_asking_for_help(a));
        agents.carried[0] = Some(ObjectKind::C);

        // Expired timer: gave up already.
        agents.give_up_cooldown[0] = 0.0;
        assert!(!agents.is_asking_for_help(a));
        agents.give_up_cooldown[0] = 5.0;

        // Already helped: satisfied.
        agents.bind_help(AgentId(1), a);
        assert!(!agents.is_asking_for_help(a));
    }
}

#[cfg(test)]
mod decisions {
    use antsort_core::{AgentId, ObjectKind, SimConfig};

    use super::helpers::{config, fixture};
    use crate::behavior::update_agent;

    #[test]
    fn blank_memory_picks_up_unconditionally() {
        let cfg = config();
        let (mut world, mut agents, mut rngs) = fixture(9, &[(4, 4)]);
        let a = AgentId(0);
        assert!(world.put_object(ObjectKind::A, 4, 4));

        update_agent(a, &mut world, &mut agents, &cfg, 1.0, rngs.get_mut(a));

        assert_eq!(agents.carried[0], Some(ObjectKind::A));
        assert_eq!(world.object_counts(), [0, 0, 0]);
        // The perception was remembered with no corruption configured.
        assert_eq!(agents.memory[0].frequency(ObjectKind::A), 0.1);
    }

    #[test]
    fn blank_memory_never_puts_down() {
        let cfg = config();
        let (mut world, mut agents, mut rngs) = fixture(9, &[(4, 4)]);
        let a = AgentId(0);
        agents.carried[0] = Some(ObjectKind::A);

        for _ in 0..50 {
            update_agent(a, &mut world, &mut agents, &cfg, 1.0, rngs.get_mut(a));
            assert_eq!(agents.carried[0], Some(ObjectKind::A));
        }
        assert_eq!(world.object_counts(), [0, 0, 0]);
    }

    #[test]
    fn heavy_pickup_broadcasts_and_arms_timers() {
        let cfg = config();
        let (mut world, mut agents, mut rngs) = fixture(9, &[(4, 4)]);
        let a = AgentId(0);
        assert!(world.put_object(ObjectKind::C, 4, 4));

        update_agent(a, &mut world, &mut agents, &cfg, 1.0, rngs.get_mut(a));

        assert_eq!(agents.carried[0], Some(ObjectKind::C));
        assert_eq!(world.position_of(a), Some((4, 4)), "pick-up consumes the turn");
        assert_eq!(world.marker_at(4, 4), 1.0);
        assert_eq!(world.marker_at(5, 4), 0.5);
        // Cooldowns were armed, then saw this tick's decrement.
        assert_eq!(agents.marker_cooldown[0], cfg.marker_cooldown - 1.0);
        assert_eq!(agents.give_up_cooldown[0], cfg.give_up_cooldown - 1.0);
        assert!(agents.is_asking_for_help(a));
    }

    #[test]
    fn solo_heavy_carrier_stands_and_waits() {
        let cfg = config();
        let (mut world, mut agents, mut rngs) = fixture(9, &[(4, 4)]);
        let a = AgentId(0);
        agents.carried[0] = Some(ObjectKind::C);
        agents.marker_cooldown[0] = 3.0;
        agents.give_up_cooldown[0] = 7.0;

        update_agent(a, &mut world, &mut agents, &cfg, 1.0, rngs.get_mut(a));

        assert_eq!(world.position_of(a), Some((4, 4)));
        assert_eq!(agents.carried[0], Some(ObjectKind::C));
        assert_eq!(world.marker_at(4, 4), 0.0, "no broadcast while on cooldown");
        assert_eq!(agents.marker_cooldown[0], 2.0);
        assert_eq!(agents.give_up_cooldown[0], 6.0);
    }

    #[test]
    fn expired_marker_cooldown_rebroadcasts() {
        let cfg = config();
        let (mut world, mut agents, mut rngs) = fixture(9, &[(4, 4)]);
        let a = AgentId(0);
        agents.carried[0] = Some(ObjectKind::C);
        agents.marker_cooldown[0] = 0.0;
        agents.give_up_cooldown[0] = 10.0;

        update_agent(a, &mut world, &mut agents, &cfg, 1.0, rngs.get_mut(a));

        assert_eq!(world.marker_at(4, 4), 1.0);
        assert_eq!(agents.marker_cooldown[0], cfg.marker_cooldown - 1.0);
        assert_eq!(world.position_of(a), Some((4, 4)));
    }

    #[test]
    fn give_up_drops_clears_marker_and_walks_away() {
        let cfg = config();
        let (mut world, mut agents, mut rngs) = fixture(9, &[(4, 4)]);
        let a = AgentId(0);
        agents.carried[0] = Some(ObjectKind::C);
        agents.marker_cooldown[0] = 10.0;
        agents.give_up_cooldown[0] = 0.0;
        world.put_marker(a, cfg.marker_radius);

        update_agent(a, &mut world, &mut agents, &cfg, 1.0, rngs.get_mut(a));

        assert_eq!(agents.carried[0], None);
        assert_eq!(world.object_at(4, 4), Some(ObjectKind::C));
        assert_eq!(world.marker_at(4, 4), 0.0, "the call for help is withdrawn");
        // The walk-away saw the pre-drop marker, found the field zeroed, and
        // took the first direction in declaration order: north.
        assert_eq!(world.position_of(a), Some((4, 5)));
        // Both timers were zeroed, then saw this tick's decrement.
        assert_eq!(agents.marker_cooldown[0], -1.0);
        assert_eq!(agents.give_up_cooldown[0], -1.0);
        assert!(!agents.is_asking_for_help(a));
    }

    #[test]
    fn give_up_blocked_by_underfoot_object_keeps_carrying() {
        let cfg = config();
        let (mut world, mut agents, mut rngs) = fixture(9, &[(4, 4)]);
        let a = AgentId(0);
        agents.carried[0] = Some(ObjectKind::C);
        agents.marker_cooldown[0] = 10.0;
        agents.give_up_cooldown[0] = 0.0;
        assert!(world.put_object(ObjectKind::A, 4, 4));

        update_agent(a, &mut world, &mut agents, &cfg, 1.0, rngs.get_mut(a));

        // The forced drop failed, so nothing was released: the carrier stays
        // put and will retry next tick.
        assert_eq!(agents.carried[0], Some(ObjectKind::C));
        assert_eq!(world.object_at(4, 4), Some(ObjectKind::A));
        assert_eq!(world.position_of(a), Some((4, 4)));
        assert_eq!(agents.give_up_cooldown[0], -1.0, "not reset, keeps counting down");
    }

    #[test]
    fn carrying_light_over_an_object_keeps_both() {
        let cfg = config();
        let (mut world, mut agents, mut rngs) = fixture(9, &[(4, 4)]);
        let a = AgentId(0);
        agents.carried[0] = Some(ObjectKind::A);
        assert!(world.put_object(ObjectKind::B, 4, 4));

        update_agent(a, &mut world, &mut agents, &cfg, 1.0, rngs.get_mut(a));

        assert_eq!(agents.carried[0], Some(ObjectKind::A));
        assert_eq!(world.object_counts(), [0, 1, 0]);
        assert_eq!(agents.memory[0].frequency(ObjectKind::B), 0.1);
    }

    #[test]
    fn corrupted_memory_never_records_the_true_kind() {
        let cfg = SimConfig { error_rate: 1.0, ..config() };
        let (mut world, mut agents, mut rngs) = fixture(9, &[(4, 4)]);
        let a = AgentId(0);
        assert!(world.put_object(ObjectKind::A, 4, 4));

        update_agent(a, &mut world, &mut agents, &cfg, 1.0, rngs.get_mut(a));

        // The pick-up itself used the true perception.
        assert_eq!(agents.carried[0], Some(ObjectKind::A));
        // The memory did not.
        assert_eq!(agents.memory[0].frequency(ObjectKind::A), 0.0);
        let others = agents.memory[0].frequency(ObjectKind::B)
            + agents.memory[0].frequency(ObjectKind::C);
        assert_eq!(others, 0.1);
    }
}

#[cfg(test)]
mod cooperation {
    use antsort_core::{AgentId, ObjectKind, SimConfig};

    use super::helpers::{config, fixture};
    use crate::behavior::update_agent;

    #[test]
    fn walker_adopts_an_asking_neighbor() {
        let cfg = config();
        let (mut world, mut agents, mut rngs) = fixture(9, &[(4, 4), (5, 4)]);
        let carrier = AgentId(0);
        let walker = AgentId(1);
        agents.carried[0] = Some(ObjectKind::C);
        agents.give_up_cooldown[0] = 5.0;
        world.put_marker(carrier, cfg.marker_radius);

        update_agent(walker, &mut world, &mut agents, &cfg, 1.0, rngs.get_mut(walker));

        assert_eq!(agents.helper[0], Some(walker));
        assert_eq!(agents.assisting[1], Some(carrier));
        assert_eq!(world.position_of(walker), Some((5, 4)), "the handshake consumes the tick");
        assert_eq!(world.marker_at(4, 4), 0.0, "an answered call is withdrawn");
        assert_eq!(world.marker_at(5, 4), 0.0);
    }

    #[test]
    fn engaged_walkers_do_not_adopt() {
        let cfg = config();
        let (mut world, mut agents, mut rngs) = fixture(9, &[(4, 4), (5, 4)]);
        let walker = AgentId(1);
        agents.carried[0] = Some(ObjectKind::C);
        agents.give_up_cooldown[0] = 5.0;
        // The walker already holds something, so it cannot help.
        agents.carried[1] = Some(ObjectKind::B);

        update_agent(walker, &mut world, &mut agents, &cfg, 1.0, rngs.get_mut(walker));

        assert_eq!(agents.helper[0], None);
        assert_eq!(agents.assisting[1], None);
    }

    #[test]
    fn helpers_are_dormant() {
        let cfg = SimConfig { desertion_rate: 0.0, ..config() };
        let (mut world, mut agents, mut rngs) = fixture(9, &[(4, 4), (5, 4)]);
        let helper = AgentId(1);
        agents.carried[0] = Some(ObjectKind::C);
        agents.bind_help(helper, AgentId(0));
        agents.marker_cooldown[1] = 3.0;

        update_agent(helper, &mut world, &mut agents, &cfg, 1.0, rngs.get_mut(helper));

        assert_eq!(world.position_of(helper), Some((5, 4)));
        assert_eq!(agents.marker_cooldown[1], 3.0, "dormant agents skip bookkeeping");
        assert_eq!(agents.assisting[1], Some(AgentId(0)));
        for kind in ObjectKind::ALL {
            assert_eq!(agents.memory[1].frequency(kind), 0.0);
        }
    }

    #[test]
    fn desertion_dissolves_the_bond() {
        let cfg = SimConfig { desertion_rate: 1.0, ..config() };
        let (mut world, mut agents, mut rngs) = fixture(9, &[(4, 4), (5, 4)]);
        let helper = AgentId(1);
        agents.carried[0] = Some(ObjectKind::C);
        agents.give_up_cooldown[0] = 5.0;
        agents.bind_help(helper, AgentId(0));

        update_agent(helper, &mut world, &mut agents, &cfg, 1.0, rngs.get_mut(helper));

        assert_eq!(agents.helper[0], None);
        assert_eq!(agents.assisting[1], None);
        // The carrier keeps its load and may recruit again.
        assert_eq!(agents.carried[0], Some(ObjectKind::C));
        assert!(agents.is_asking_for_help(AgentId(0)));
        assert_eq!(world.position_of(helper), Some((5, 4)), "desertion consumes the tick");
    }

    #[test]
    fn assisted_pair_moves_in_lockstep() {
        let cfg = config();
        let (mut world, mut agents, mut rngs) = fixture(20, &[(10, 10), (11, 10)]);
        let carrier = AgentId(0);
        agents.carried[0] = Some(ObjectKind::C);
        agents.bind_help(AgentId(1), carrier);

        for _ in 0..20 {
            update_agent(carrier, &mut world, &mut agents, &cfg, 1.0, rngs.get_mut(carrier));

            let (cx, cz) = world.position_of(carrier).unwrap();
            let (hx, hz) = world.position_of(AgentId(1)).unwrap();
            assert_eq!((hx - cx, hz - cz), (1, 0), "the pair never breaks formation");
            assert_eq!(world.agent_at(cx, cz), Some(carrier));
            assert_eq!(world.agent_at(hx, hz), Some(AgentId(1)));
            assert_eq!(agents.carried[0], Some(ObjectKind::C));
        }
    }

    #[test]
    fn assisted_carrier_timers_freeze() {
        let cfg = config();
        let (mut world, mut agents, mut rngs) = fixture(20, &[(10, 10), (11, 10)]);
        let carrier = AgentId(0);
        agents.carried[0] = Some(ObjectKind::C);
        agents.marker_cooldown[0] = 3.0;
        agents.give_up_cooldown[0] = 7.0;
        agents.bind_help(AgentId(1), carrier);

        update_agent(carrier, &mut world, &mut agents, &cfg, 1.0, rngs.get_mut(carrier));

        assert_eq!(agents.marker_cooldown[0], 3.0);
        assert_eq!(agents.give_up_cooldown[0], 7.0);
    }

    #[test]
    fn gradient_walker_climbs_around_the_source() {
        let cfg = config();
        let (mut world, mut agents, mut rngs) = fixture(10, &[(5, 5), (6, 5)]);
        let walker = AgentId(0);
        // The source stands on its own broadcast; it is not asking for help
        // (nothing carried), so the walker follows the field instead of
        // bonding.
        world.put_marker(AgentId(1), 2);

        update_agent(walker, &mut world, &mut agents, &cfg, 1.0, rngs.get_mut(walker));

        // East holds the peak but is occupied by the source; the two
        // diagonal runners-up tie at 1/2 and northeast wins by declaration
        // order.
        assert_eq!(world.position_of(walker), Some((6, 6)));
    }
}
