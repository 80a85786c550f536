use lifegame_lib::{find_final, Board, Error as LifeError, Settings, Simulation, Status, Uuid};
use std::error::Error;

const T: bool = true;
const F: bool = false;

fn new_simulation(board: Board) -> Result<Simulation, LifeError> {
    Simulation::new(Uuid::from_u128(0x67e5_5044_10b1_426f_9247_bb68_0e5f_e0c8), None, board)
}

fn checkerboard(size: usize) -> Board {
    (0..size)
        .map(|row| (0..size).map(|column| (row + column) % 2 == 0).collect())
        .collect()
}

#[test]
fn vertical_line_oscillates() -> Result<(), Box<dyn Error>> {
    let vertical = vec![vec![F, T, F], vec![F, T, F], vec![F, T, F]];
    let mut simulation = new_simulation(vertical.clone())?;
    simulation.next_generation();
    assert_eq!(
        simulation.current_state(),
        &vec![vec![F, F, F], vec![T, T, T], vec![F, F, F]]
    );
    simulation.next_generation();
    assert_eq!(simulation.current_state(), &vertical);
    assert!(!simulation.is_final_state());
    Ok(())
}

#[test]
fn lonely_cell_dies() -> Result<(), Box<dyn Error>> {
    let mut simulation = new_simulation(vec![vec![T]])?;
    simulation.next_generation();
    assert_eq!(simulation.current_state(), &vec![vec![F]]);

    let mut simulation = new_simulation(vec![vec![F]])?;
    simulation.next_generation();
    assert_eq!(simulation.current_state(), &vec![vec![F]]);
    Ok(())
}

#[test]
fn diagonal_dies_out() -> Result<(), Box<dyn Error>> {
    let mut simulation = new_simulation(vec![vec![T, F, F], vec![F, T, F], vec![F, F, T]])?;
    simulation.advance_by(5);
    assert_eq!(simulation.generation(), 5);
    assert_eq!(simulation.current_state(), &vec![vec![F; 3]; 3]);
    assert!(simulation.is_final_state());
    Ok(())
}

#[test]
fn checkerboard_never_settles() -> Result<(), Box<dyn Error>> {
    let mut simulation = new_simulation(checkerboard(5))?;
    assert_eq!(find_final(&mut simulation, 50), Status::Exhausted);
    assert_eq!(simulation.generation(), 50);
    assert!(!simulation.is_final_state());
    Ok(())
}

#[test]
fn final_state_is_stable() -> Result<(), Box<dyn Error>> {
    let beehive = vec![
        vec![F, F, F, F, F, F],
        vec![F, F, T, T, F, F],
        vec![F, T, F, F, T, F],
        vec![F, F, T, T, F, F],
        vec![F, F, F, F, F, F],
    ];
    let mut simulation = new_simulation(beehive.clone())?;
    assert_eq!(find_final(&mut simulation, 10), Status::Final);
    assert_eq!(simulation.generation(), 1);
    assert_eq!(simulation.current_state(), &beehive);
    for _ in 0..5 {
        simulation.next_generation();
        assert!(simulation.is_final_state());
    }
    Ok(())
}

#[test]
fn horizontal_line_is_not_final() -> Result<(), Box<dyn Error>> {
    let mut simulation = new_simulation(vec![vec![F, F, F], vec![T, T, T], vec![F, F, F]])?;
    simulation.next_generation();
    assert!(!simulation.is_final_state());
    Ok(())
}

#[test]
fn zero_attempts() -> Result<(), Box<dyn Error>> {
    let mut simulation = new_simulation(vec![vec![F; 4]; 4])?;
    assert_eq!(find_final(&mut simulation, 0), Status::Exhausted);
    assert_eq!(simulation.generation(), 0);
    assert_eq!(find_final(&mut simulation, 1), Status::Final);
    Ok(())
}

#[test]
fn settings_bound_the_search() -> Result<(), Box<dyn Error>> {
    let settings = Settings::default().set_max_attempts(50);
    let mut simulation = settings.start(checkerboard(5), Some(42))?;
    assert_eq!(settings.find_final(&mut simulation), Status::Exhausted);

    let mut simulation = settings.start(vec![vec![T, T], vec![T, T]], Some(42))?;
    assert_eq!(settings.find_final(&mut simulation), Status::Final);
    assert_eq!(simulation.owner(), Some(42));
    Ok(())
}

#[test]
fn oversized_board() {
    let settings = Settings::default();
    assert_eq!(
        settings.start(vec![vec![F; 99]; 101], None).err(),
        Some(LifeError::BoardSize(100, 101, 99))
    );
    assert_eq!(
        settings.start(vec![vec![F; 101]; 100], None).err(),
        Some(LifeError::BoardSize(100, 100, 101))
    );
    assert_eq!(
        settings.start(Vec::new(), None).err(),
        Some(LifeError::BoardSize(100, 0, 0))
    );
}

#[test]
#[cfg(feature = "serde")]
fn ser() -> Result<(), Box<dyn Error>> {
    let settings = Settings::default();
    let mut simulation = settings.start(vec![vec![T, T], vec![T, T]], Some(3))?;
    simulation.next_generation();

    let json = serde_json::to_string(&simulation.ser())?;
    let save: lifegame_lib::SimulationSer = serde_json::from_str(&json)?;
    let restored = save.simulation()?;

    assert_eq!(restored, simulation);
    assert_eq!(restored.id(), simulation.id());
    assert_eq!(restored.owner(), Some(3));
    assert_eq!(restored.generation(), 1);
    assert!(restored.is_final_state());
    Ok(())
}

#[test]
#[cfg(feature = "serde")]
fn ser_board_format() -> Result<(), Box<dyn Error>> {
    let json = r#"{
        "id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
        "current": [[false, true, false], [false, true, false], [false, true, false]]
    }"#;
    let save: lifegame_lib::SimulationSer = serde_json::from_str(json)?;
    let mut simulation = save.simulation()?;
    assert_eq!(simulation.owner(), None);
    assert_eq!(simulation.generation(), 0);
    assert_eq!(simulation.rule().to_string(), "B3/S23");

    simulation.next_generation();
    assert_eq!(
        serde_json::to_string(simulation.current_state())?,
        "[[false,false,false],[true,true,true],[false,false,false]]"
    );
    Ok(())
}

#[test]
#[cfg(feature = "serde")]
fn ser_mismatched_previous() -> Result<(), Box<dyn Error>> {
    let mut save = Settings::default().start(vec![vec![F; 3]; 3], None)?.ser();
    save.previous = Some(vec![vec![F; 2]; 3]);
    assert_eq!(save.simulation(), Err(LifeError::DimensionMismatch));

    save.previous = None;
    save.rule = String::from("not a rule");
    assert!(matches!(save.simulation(), Err(LifeError::ParseRuleError(_))));
    Ok(())
}
