/// Parses an interactive selection string like "1,3-5" into zero-based
/// indices.
///
/// Numbers in the input are 1-based, matching the printed listing.
/// Empty input selects everything; duplicates collapse; the result is
/// ascending.
pub fn parse_selection(input: &str, count: usize) -> Result<Vec<usize>, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok((0..count).collect());
    }

    let mut picked = vec![false; count];
    for part in input.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let (lo, hi) = match part.split_once('-') {
            Some((a, b)) => (parse_index(a, count)?, parse_index(b, count)?),
            None => {
                let i = parse_index(part, count)?;
                (i, i)
            }
        };
        if lo > hi {
            return Err(format!("backwards range \"{part}\""));
        }
        for slot in &mut picked[lo..=hi] {
            *slot = true;
        }
    }

    Ok(picked
        .iter()
        .enumerate()
        .filter_map(|(i, &on)| on.then_some(i))
        .collect())
}

fn parse_index(s: &str, count: usize) -> Result<usize, String> {
    let s = s.trim();
    let n: usize = s.parse().map_err(|_| format!("invalid number \"{s}\""))?;
    if n == 0 || n > count {
        return Err(format!("{n} is out of range (1-{count})"));
    }
    Ok(n - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_selects_everything() {
        // Act / Assert
        assert_eq!(parse_selection("", 3).unwrap(), vec![0, 1, 2]);
        assert_eq!(parse_selection("  \n", 2).unwrap(), vec![0, 1]);
    }

    #[test]
    fn singles_and_ranges_combine() {
        // Act
        let picked = parse_selection("1,3-5, 8", 10).unwrap();

        // Assert
        assert_eq!(picked, vec![0, 2, 3, 4, 7]);
    }

    #[test]
    fn duplicates_collapse() {
        // Act / Assert
        assert_eq!(parse_selection("2,2,1-2", 4).unwrap(), vec![0, 1]);
    }

    #[test]
    fn out_of_range_is_rejected() {
        // Act / Assert
        assert!(parse_selection("0", 3).is_err());
        assert!(parse_selection("4", 3).is_err());
        assert!(parse_selection("1-9", 3).is_err());
    }

    #[test]
    fn garbage_is_rejected() {
        // Act / Assert
        assert!(parse_selection("one", 3).is_err());
        assert!(parse_selection("3-1", 3).is_err());
    }
}
