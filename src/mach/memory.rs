use super::{Address, Val};
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

pub const MAX_MEMORY: usize = 2048;
pub const ADDRESS_PREFIX: &str = "0x";

/// ## Flat addressable memory
///
/// Every address below the capacity exists from the start and holds zero.
/// Addresses are written in source as `0x` followed by hex digits.

#[derive(Debug, Clone)]
pub struct Memory {
    cells: Vec<Val>,
}

impl Default for Memory {
    fn default() -> Memory {
        Memory::new(MAX_MEMORY)
    }
}

impl Memory {
    pub fn new(capacity: usize) -> Memory {
        Memory {
            cells: vec![Val::default(); capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut() {
            *cell = Val::default();
        }
    }

    pub fn is_address(token: &str) -> bool {
        token.starts_with(ADDRESS_PREFIX)
    }

    /// Parse an address token and check it against the capacity.
    pub fn address(&self, token: &str) -> Result<Address> {
        let digits = match token.strip_prefix(ADDRESS_PREFIX) {
            Some(digits) if !digits.is_empty() => digits,
            _ => return Err(error!(AddressResolution; &format!("{:?} IS NOT AN ADDRESS", token))),
        };
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(error!(AddressResolution; &format!("{:?} IS NOT AN ADDRESS", token)));
        }
        match usize::from_str_radix(digits, 16) {
            Ok(address) if address < self.capacity() => Ok(address),
            _ => Err(self.out_of_range(token)),
        }
    }

    pub fn read(&self, address: Address) -> Result<&Val> {
        match self.cells.get(address) {
            Some(val) => Ok(val),
            None => Err(self.out_of_range(&format!("{:#x}", address))),
        }
    }

    pub fn write(&mut self, address: Address, val: Val) -> Result<()> {
        if address >= self.capacity() {
            return Err(self.out_of_range(&format!("{:#x}", address)));
        }
        self.cells[address] = val;
        Ok(())
    }

    /// Value of an argument token. Address tokens read memory,
    /// anything else is a literal.
    pub fn resolve(&self, token: &str) -> Result<Val> {
        if Memory::is_address(token) {
            let address = self.address(token)?;
            Ok(self.read(address)?.clone())
        } else {
            Ok(Val::from_literal(token))
        }
    }

    /// Cells not holding zero, in address order.
    pub fn dump(&self) -> impl Iterator<Item = (Address, &Val)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, val)| !val.is_zero())
    }

    fn out_of_range(&self, token: &str) -> Error {
        error!(AddressResolution; &format!(
            "{} IS OUTSIDE MEMORY OF {}",
            token,
            self.capacity()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_zero_filled() {
        let m = Memory::default();
        assert_eq!(m.capacity(), MAX_MEMORY);
        assert_eq!(m.read(0).unwrap(), &Val::Integer(0));
        assert_eq!(m.read(MAX_MEMORY - 1).unwrap(), &Val::Integer(0));
        assert_eq!(m.dump().count(), 0);
    }

    #[test]
    fn test_address_forms() {
        let m = Memory::default();
        assert_eq!(m.address("0x0").unwrap(), 0);
        assert_eq!(m.address("0x00").unwrap(), 0);
        assert_eq!(m.address("0x1f").unwrap(), 31);
        assert_eq!(m.address("0x7FF").unwrap(), 2047);
    }

    #[test]
    fn test_bad_addresses() {
        let m = Memory::default();
        for token in &["0x", "0xzz", "0x+1", "12", "0x800"] {
            let e = m.address(token).unwrap_err();
            assert_eq!(e.code(), ErrorCode::AddressResolution, "{}", token);
        }
    }

    #[test]
    fn test_out_of_range_read_write() {
        let mut m = Memory::new(4);
        assert_eq!(m.read(4).unwrap_err().code(), ErrorCode::AddressResolution);
        assert_eq!(
            m.write(4, Val::Integer(1)).unwrap_err().code(),
            ErrorCode::AddressResolution
        );
    }

    #[test]
    fn test_resolve() {
        let mut m = Memory::default();
        m.write(2, Val::from("hi")).unwrap();
        assert_eq!(m.resolve("0x2").unwrap(), Val::from("hi"));
        assert_eq!(m.resolve("7").unwrap(), Val::from("7"));
        assert_eq!(m.resolve("0x3").unwrap(), Val::Integer(0));
    }

    #[test]
    fn test_dump_and_clear() {
        let mut m = Memory::default();
        m.write(0x10, Val::Integer(3)).unwrap();
        m.write(0x02, Val::from("x")).unwrap();
        m.write(0x05, Val::Integer(0)).unwrap();
        let dumped: Vec<Address> = m.dump().map(|(a, _)| a).collect();
        assert_eq!(dumped, vec![0x02, 0x10]);
        m.clear();
        assert_eq!(m.dump().count(), 0);
    }
}
