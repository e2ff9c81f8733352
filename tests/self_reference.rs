//! Recursive and mutually-recursive closures rebuilt through late-bound cells.

use cellwork::*;

/// `add_i(x, rem)`: adds `rem` to `x` one recursive step at a time.
fn recursive_adder(me: IndirectionCell<Value>) -> Closure {
    Closure::new("add_i", 2, vec![me], |frame| {
        let x = frame.arg(0).as_int()?;
        let rem = frame.arg(1).as_int()?;
        if rem > 0 {
            let me = frame.captured(0)?;
            let inner = call_value(&me, &[Value::Int(x), Value::Int(rem - 1)])?.as_int()?;
            Ok(Value::Int(1 + inner))
        } else {
            Ok(Value::Int(x))
        }
    })
}

#[test]
fn test_self_reference_round() {
    let c = create_cell(None);
    let f = Value::from(recursive_adder(c.as_cell().unwrap().clone()));

    // not callable into itself yet
    let early = call_value(&f, &[Value::Int(10), Value::Int(1)]).unwrap_err();
    assert_eq!(early, CellError::UnboundCell);

    set_cell_value(&c, f.clone()).unwrap();
    assert!(get_cell_value(&c).unwrap().is(&f));

    let sum = call_value(&f, &[Value::Int(10), Value::Int(8)]).unwrap();
    assert_eq!(sum.as_int(), Ok(18));

    // break the cell -> closure -> cell cycle
    c.as_cell().unwrap().take();
}

#[test]
fn test_mutual_recursion_through_late_binding() {
    let mut bindings = LateBinding::new();
    let is_even = bindings.declare("is_even");
    let is_odd = bindings.declare("is_odd");

    let even = Closure::new("is_even", 1, vec![is_odd.clone()], |frame| {
        let n = frame.arg(0).as_int()?;
        if n == 0 {
            return Ok(Value::Bool(true));
        }
        call_value(&frame.captured(0)?, &[Value::Int(n - 1)])
    });
    let odd = Closure::new("is_odd", 1, vec![is_even.clone()], |frame| {
        let n = frame.arg(0).as_int()?;
        if n == 0 {
            return Ok(Value::Bool(false));
        }
        call_value(&frame.captured(0)?, &[Value::Int(n - 1)])
    });

    bindings.bind("is_even", Value::from(even));
    assert_eq!(bindings.unbound(), vec!["is_odd"]);
    bindings.bind("is_odd", Value::from(odd));

    let defs = bindings.finish().unwrap();
    assert_eq!(call_value(&defs["is_even"], &[Value::Int(10)]).unwrap().as_bool(), Ok(true));
    assert_eq!(call_value(&defs["is_odd"], &[Value::Int(7)]).unwrap().as_bool(), Ok(true));
    assert_eq!(call_value(&defs["is_odd"], &[Value::Int(4)]).unwrap().as_bool(), Ok(false));

    is_even.take();
    is_odd.take();
}

#[test]
fn test_stateful_closure_shares_its_counter() {
    // an incrementor keeps its running total in a captured cell
    let total = IndirectionCell::new(Value::Int(0));
    let by = IndirectionCell::new(Value::Int(5));
    let fives = Closure::new("fives", 0, vec![total.clone(), by], |frame| {
        let current = frame.captured(0)?;
        let step = frame.captured(1)?.as_int()?;
        let next = Value::Int(current.as_int()? + step);
        set_cell_value(&Value::Cell(frame.callee().captures()[0].clone()), next)?;
        Ok(current)
    });

    let seen: Vec<i64> = (0..3)
        .map(|_| fives.call(&[]).unwrap().as_int().unwrap())
        .collect();
    assert_eq!(seen, vec![0, 5, 10]);
    assert_eq!(total.get().unwrap().as_int(), Ok(15));
}

#[test]
fn test_weak_capture_lets_the_pair_be_released() {
    let cell: IndirectionCell<Value> = IndirectionCell::empty();
    let weak = cell.downgrade();

    // the closure holds its own cell weakly, so dropping `cell` frees both
    let probe = weak.clone();
    let f = Closure::new("probe", 0, Vec::new(), move |_| {
        let me = probe.upgrade().ok_or(CellError::UnboundCell)?;
        Ok(Value::Bool(me.is_populated()))
    });
    cell.set(Value::from(f));

    let f = cell.get().unwrap();
    assert_eq!(call_value(&f, &[]).unwrap().as_bool(), Ok(true));
    drop(f);

    drop(cell);
    assert!(weak.upgrade().is_none());
}

#[test]
fn test_rebinding_is_seen_by_existing_closures() {
    let target = IndirectionCell::new(Value::Int(1));
    let read = Closure::new("read", 0, vec![target.clone()], |frame| frame.captured(0));

    assert_eq!(read.call(&[]).unwrap().as_int(), Ok(1));
    target.set(Value::Int(2));
    assert_eq!(read.call(&[]).unwrap().as_int(), Ok(2));
}
