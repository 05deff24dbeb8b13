use gf_core::data::{
    ActorData, ClassData, EnemyData, ItemData, Learning, SkillData, SummonDirective, UsableFlags,
};
use gf_core::{
    Action, ActorId, BattleResult, ClassId, EnemyId, GameData, GameState, GfConfig, ItemId,
    SkillId, SkillTypeId, Troop, apply_summon_effects, check_battle_end, end_battle,
    process_victory,
};
use gf_core::{junction, scripting};

/// A small but complete game: three party members, two Guardian Forces
/// with AP-gated skills, a summon skill, and an AP-yielding enemy.
fn game() -> GameState {
    let mut data = GameData::new();
    data.insert_class(ClassData {
        id: ClassId(1),
        name: "SeeD".to_string(),
        exp_basis: 30,
        exp_extra: 20,
        learnings: Vec::new(),
    });
    data.insert_class(ClassData {
        id: ClassId(2),
        name: "Guardian".to_string(),
        exp_basis: 30,
        exp_extra: 20,
        learnings: vec![
            Learning {
                level: 1,
                skill_id: SkillId(10),
                ap_required: Some(10),
            },
            Learning {
                level: 1,
                skill_id: SkillId(11),
                ap_required: Some(20),
            },
        ],
    });
    data.insert_skill(SkillData {
        id: SkillId(10),
        name: "Blizzara".to_string(),
        stype_id: SkillTypeId(1),
        flags: UsableFlags::empty(),
        summon: None,
    });
    data.insert_skill(SkillData {
        id: SkillId(11),
        name: "Diamond Dust".to_string(),
        stype_id: SkillTypeId(1),
        flags: UsableFlags::NO_SHARE,
        summon: None,
    });
    data.insert_skill(SkillData {
        id: SkillId(50),
        name: "Summon Shiva".to_string(),
        stype_id: SkillTypeId(3),
        flags: UsableFlags::empty(),
        summon: Some(SummonDirective {
            targets: vec![ActorId(7)],
            style: Some(2),
        }),
    });
    data.insert_item(ItemData {
        id: ItemId(70),
        name: "Dismissal Bell".to_string(),
        flags: UsableFlags::DISMISS_SUMMON,
        summon: None,
    });
    data.insert_item(ItemData {
        id: ItemId(71),
        name: "Amnesia Greens".to_string(),
        flags: UsableFlags::GF_ITEM,
        summon: None,
    });
    for (id, class, gf) in [
        (1u16, 1u16, false),
        (2, 1, false),
        (3, 1, false),
        (7, 2, true),
        (8, 2, true),
    ] {
        data.insert_actor(ActorData {
            id: ActorId(id),
            name: format!("Actor {id}"),
            class_id: ClassId(class),
            initial_level: 1,
            max_hp: 200,
            is_guardian_force: gf,
        });
    }
    data.insert_enemy(EnemyData {
        id: EnemyId(1),
        name: "Bite Bug".to_string(),
        level: 2,
        max_hp: 60,
        exp: 30,
        gold: 10,
        ap: 5,
    });
    data.starting_members = vec![ActorId(1), ActorId(2), ActorId(3), ActorId(7), ActorId(8)];
    GameState::new(data, GfConfig::default())
}

fn kill_troop(troop: &mut Troop) {
    for enemy in &mut troop.members {
        enemy.hp = 0;
    }
}

#[test]
fn full_battle_with_summon_and_rewards() {
    let mut state = game();
    junction::toggle(&mut state.actors, ActorId(1), ActorId(7));
    junction::toggle(&mut state.actors, ActorId(1), ActorId(8));

    let mut troop = Troop::new(&state.data, &[EnemyId(1), EnemyId(1)]);

    // Actor 2 summons Shiva in-place: her slot is replaced.
    let success =
        apply_summon_effects(&mut state, &Action::skill(ActorId(2), SkillId(50))).unwrap();
    assert!(success);
    assert_eq!(
        state.party.battle_members(),
        vec![ActorId(1), ActorId(7), ActorId(3)]
    );

    // The battle continues until the troop is wiped.
    assert_eq!(check_battle_end(&mut state, &troop), None);
    kill_troop(&mut troop);
    assert_eq!(
        check_battle_end(&mut state, &troop),
        Some(BattleResult::Victory)
    );

    process_victory(&mut state, &troop);
    end_battle(&mut state);

    // Natural clear restored the real party.
    assert!(!state.party.summoned());
    assert_eq!(
        state.party.battle_members(),
        vec![ActorId(1), ActorId(2), ActorId(3)]
    );

    // 2 enemies x 30 EXP, split between the two GFs before actor 1's
    // own total commits; unjunctioned members keep the full 60.
    assert_eq!(state.actors.actor(ActorId(1)).unwrap().exp, 60);
    assert_eq!(state.actors.actor(ActorId(7)).unwrap().exp, 30);
    assert_eq!(state.actors.actor(ActorId(8)).unwrap().exp, 30);

    // 2 enemies x 5 AP, undivided, to each junctioned GF: enough to
    // finish the 10-AP skill and roll the target to the next one.
    for id in [7u16, 8] {
        let gf = state.actors.actor(ActorId(id)).unwrap();
        assert!(gf.has_skill(SkillId(10)));
        assert_eq!(gf.learning.active_skill(), Some(SkillId(11)));
    }
    assert!(state.messages.iter().any(|m| m == "Gained 10 AP!"));
    assert!(state.messages.iter().any(|m| m == "Blizzara learned!"));

    // The finished skill is shared with the master; the no-share one
    // stays with the GF even once learned.
    let master_skills = junction::effective_skills(&state.actors, &state.data, ActorId(1));
    assert!(master_skills.contains(&SkillId(10)));
    assert!(!master_skills.contains(&SkillId(11)));
}

#[test]
fn wiped_summon_falls_back_to_real_party() {
    let mut state = game();
    let troop = Troop::new(&state.data, &[EnemyId(1)]);

    apply_summon_effects(&mut state, &Action::skill(ActorId(2), SkillId(50))).unwrap();
    state.actors.actor_mut(ActorId(7)).unwrap().hp = 0;
    state.actors.actor_mut(ActorId(1)).unwrap().hp = 0;
    state.actors.actor_mut(ActorId(3)).unwrap().hp = 0;

    // The summon roster [1, 7, 3] is wiped, but actor 2 still stands:
    // the override clears and the battle goes on.
    assert_eq!(check_battle_end(&mut state, &troop), None);
    assert!(!state.party.summoned());
    assert_eq!(
        state.party.battle_members(),
        vec![ActorId(1), ActorId(2), ActorId(3)]
    );

    // With the whole real party down, defeat is finally reported.
    state.actors.actor_mut(ActorId(2)).unwrap().hp = 0;
    assert_eq!(
        check_battle_end(&mut state, &troop),
        Some(BattleResult::Defeat)
    );
}

#[test]
fn dismiss_item_reverts_summon_mid_battle() {
    let mut state = game();

    apply_summon_effects(&mut state, &Action::skill(ActorId(2), SkillId(50))).unwrap();
    assert!(state.party.summoned());

    let success =
        apply_summon_effects(&mut state, &Action::item(ActorId(1), ItemId(70))).unwrap();
    assert!(success);
    assert!(!state.party.summoned());
    assert_eq!(
        state.party.battle_members(),
        vec![ActorId(1), ActorId(2), ActorId(3)]
    );
}

#[test]
fn gf_items_target_the_guardian_pool() {
    let state = game();
    let item = state.data.item(ItemId(71)).unwrap();
    let pool = state
        .party
        .item_candidates(item.flags.contains(UsableFlags::GF_ITEM));
    assert_eq!(pool, &[ActorId(7), ActorId(8)]);

    let bell = state.data.item(ItemId(70)).unwrap();
    let pool = state
        .party
        .item_candidates(bell.flags.contains(UsableFlags::GF_ITEM));
    assert_eq!(pool, state.party.members());
}

#[test]
fn scripted_ap_feeds_the_same_ledger() {
    let mut state = game();

    let cmd = scripting::parse_command("GainAP 7 10").unwrap().unwrap();
    scripting::exec_command(&mut state, cmd);
    assert!(state.has_skill(ActorId(7), SkillId(10)));

    // Debits only touch the new active target, never finished entries.
    let cmd = scripting::parse_command("LoseAP 7 4").unwrap().unwrap();
    scripting::exec_command(&mut state, cmd);
    let gf = state.actors.actor(ActorId(7)).unwrap();
    assert_eq!(gf.learning.entry(SkillId(10)).unwrap().earned, 10);
    assert_eq!(gf.learning.entry(SkillId(11)).unwrap().earned, 0);
}
