//! Rebuilding a recursive function from an encoded capture.
//!
//! The "encoder" writes the non-recursive capture (`by`) as JSON; the
//! "decoder" reads it back into a fresh cell, builds the closure over an Empty
//! self-cell, and only then closes the cycle.

use anyhow::{Context, Result};
use cellwork::{call_value, CellError, Closure, IndirectionCell, LateBinding, Value};

fn main() -> Result<()> {
    let by = IndirectionCell::new(8i64);
    let encoded = serde_json::to_string(&by).context("encoding capture")?;
    println!("encoded capture: {encoded}");

    let decoded: IndirectionCell<i64> = serde_json::from_str(&encoded).context("decoding capture")?;
    println!("decoded cell is a new cell: {}", !decoded.ptr_eq(&by));

    let mut bindings = LateBinding::new();
    let me = bindings.declare("add_by");
    let by = decoded.get()?;

    let add_by = Closure::new("add_by", 2, vec![me], move |frame| {
        let x = frame.arg(0).as_int()?;
        let rem = frame.arg(1).as_int()?;
        if rem == 0 {
            return Ok(Value::Int(x));
        }
        let next = call_value(&frame.captured(0)?, &[Value::Int(x + 1), Value::Int(rem - 1)])?;
        Ok(next)
    });

    println!("unbound before bind: {:?}", bindings.unbound());
    bindings.bind("add_by", Value::from(add_by));

    let defs = bindings.finish()?;
    let result = call_value(&defs["add_by"], &[Value::Int(10), Value::Int(by)])?;
    println!("add_by(10, {by}) = {result:?}");

    let empty: IndirectionCell<Value> = IndirectionCell::empty();
    match empty.get() {
        Err(CellError::UnboundCell) => println!("reading an empty cell: {}", CellError::UnboundCell),
        other => println!("unexpected: {other:?}"),
    }

    // release the self-reference
    if let Value::Closure(closure) = &defs["add_by"] {
        closure.captures()[0].take();
    }
    Ok(())
}
