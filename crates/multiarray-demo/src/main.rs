//! Walkthrough of the multiarray store.
//!
//! Run with `RUST_LOG=debug` to see allocation, resize, and free events.

use multiarray::prelude::*;

fn print_matrix(store: &ArrayStore, label: &str, array: ArrayHandle) -> Result<(), ArrayError> {
    let (rows, cols) = match *store.dims(array)? {
        [rows, cols] => (rows, cols),
        ref dims => {
            return Err(ArrayError::DimensionMismatch {
                expected: 2,
                actual: dims.len(),
            })
        }
    };
    println!("{label} ({}):", store.shape(array)?);
    for i in 0..rows {
        let row = store.index(array, i)?;
        let mut line = String::new();
        for j in 0..cols {
            let v: i32 = store.read(store.index(row, j)?)?;
            line.push_str(&format!("{v:4}"));
        }
        println!("{line}");
    }
    Ok(())
}

fn run(store: &mut ArrayStore) -> Result<(), ArrayError> {
    let a = store.allocate_for::<i32>(&[2, 3])?;
    store.copy_from_slice(a, &[3, 2, 4, 9, 2, 7])?;
    print_matrix(store, "a", a)?;

    let t = store.transpose(a)?;
    print_matrix(store, "transpose(a)", t)?;

    let mut t = t;
    for (axis, size) in [(1, 100), (0, 50), (1, 4), (0, 4)] {
        t = store.resize(t, axis, size)?;
        log::info!("resized axis {axis} to {size}: shape {}", store.shape(t)?);
    }
    print_matrix(store, "transpose(a) after resizing", t)?;

    let row = store.index(a, 1)?;
    let a = store.resize(a, 1, 5)?;
    let msg = catch(
        || store.read::<i32>(store.index(row, 0)?).map(|v| v.to_string()),
        |err| format!("caught: {err}"),
    );
    println!("reading through a view taken before resize -> {msg}");

    store.free(a)?;
    store.free(t)?;
    log::info!("live arrays after cleanup: {}", store.live_count());
    Ok(())
}

fn main() {
    env_logger::init();
    let mut store = ArrayStore::new();
    run(&mut store).or_fatal();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_matrix_rejects_other_ranks() {
        let mut store = ArrayStore::new();
        let line = store.allocate_for::<i32>(&[4]).unwrap();
        assert_eq!(
            print_matrix(&store, "line", line),
            Err(ArrayError::DimensionMismatch {
                expected: 2,
                actual: 1
            })
        );
        let cube = store.allocate_for::<i32>(&[2, 2, 2]).unwrap();
        assert!(print_matrix(&store, "cube", cube).is_err());
    }

    #[test]
    fn walkthrough_runs_and_cleans_up() {
        let mut store = ArrayStore::new();
        run(&mut store).unwrap();
        assert_eq!(store.live_count(), 0);
    }
}
