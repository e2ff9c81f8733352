use cellwork::{CellError, IndirectionCell};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Operation {
    Set(u16),
    Get,
    Take,
    // act through a second holder picked by index
    SetVia(usize, u16),
    GetVia(usize),
}

proptest! {
    #[test]
    fn test_cell_matches_option_model(
        initial in proptest::option::of(any::<u16>()),
        ops in proptest::collection::vec(
            prop_oneof![
                any::<u16>().prop_map(Operation::Set),
                Just(Operation::Get),
                Just(Operation::Take),
                (0usize..4, any::<u16>()).prop_map(|(h, v)| Operation::SetVia(h, v)),
                (0usize..4).prop_map(Operation::GetVia),
            ],
            1..100
        )
    ) {
        let mut model = initial;
        let cell = IndirectionCell::from_option(initial);
        let holders: Vec<_> = (0..4).map(|_| cell.clone()).collect();

        for op in ops {
            match op {
                Operation::Set(v) => {
                    cell.set(v);
                    model = Some(v);
                }
                Operation::SetVia(h, v) => {
                    holders[h].set(v);
                    model = Some(v);
                }
                Operation::Get => {
                    let expected = model.ok_or(CellError::UnboundCell);
                    prop_assert_eq!(cell.get(), expected);
                }
                Operation::GetVia(h) => {
                    let expected = model.ok_or(CellError::UnboundCell);
                    prop_assert_eq!(holders[h].get(), expected);
                }
                Operation::Take => {
                    prop_assert_eq!(cell.take(), model.take());
                }
            }
            prop_assert_eq!(cell.is_populated(), model.is_some());
        }

        prop_assert_eq!(cell.holders(), 5);
    }

    #[test]
    fn test_distinct_cells_never_alias(a in any::<i32>(), b in any::<i32>()) {
        let first = IndirectionCell::new(a);
        let second = IndirectionCell::new(a);
        second.set(b);
        prop_assert_eq!(first.get(), Ok(a));
        prop_assert_ne!(first, second);
    }
}
