use anchor_lang::prelude::*;
use solana_program::keccak;

use crate::error::BingoError;

/// `SlotHashes` layout: u64 entry count, then (u64 slot, [u8; 32] hash) entries,
/// most recent slot first.
const COUNT_LEN: usize = 8;
const SLOT_LEN: usize = 8;
const HASH_LEN: usize = 32;

/// Reads the most recent slot hash from the `SlotHashes` sysvar account.
///
/// The sysvar is too large to deserialize on-chain, so the first entry is read
/// straight from the account data.
pub fn recent_slot_hash(slot_hashes: &AccountInfo) -> Result<[u8; 32]> {
    let data = slot_hashes.try_borrow_data()?;
    most_recent_hash(&data)
}

pub fn most_recent_hash(data: &[u8]) -> Result<[u8; 32]> {
    let count = data
        .get(..COUNT_LEN)
        .and_then(|bytes| <[u8; COUNT_LEN]>::try_from(bytes).ok())
        .map(u64::from_le_bytes)
        .ok_or(error!(BingoError::EntropyUnavailable))?;
    require!(count > 0, BingoError::EntropyUnavailable);

    let start = COUNT_LEN + SLOT_LEN;
    data.get(start..start + HASH_LEN)
        .and_then(|bytes| <[u8; HASH_LEN]>::try_from(bytes).ok())
        .ok_or(error!(BingoError::EntropyUnavailable))
}

/// Derives the value revealed by a draw.
pub fn draw_number(entropy: &[u8; 32], game_id: u64, draw_count: u32) -> u8 {
    let digest = keccak::hashv(&[
        &entropy[..],
        &game_id.to_be_bytes()[..],
        &draw_count.to_be_bytes()[..],
    ]);
    digest.to_bytes()[31]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sysvar_data(entries: &[(u64, [u8; 32])]) -> Vec<u8> {
        let mut data = (entries.len() as u64).to_le_bytes().to_vec();
        for (slot, hash) in entries {
            data.extend_from_slice(&slot.to_le_bytes());
            data.extend_from_slice(hash);
        }
        data
    }

    #[test]
    fn reads_first_entry() {
        let data = sysvar_data(&[(11, [3u8; 32]), (10, [2u8; 32])]);
        assert_eq!(most_recent_hash(&data).unwrap(), [3u8; 32]);
    }

    #[test]
    fn reads_sysvar_account() {
        let mut data = sysvar_data(&[(42, [8u8; 32])]);
        let key = solana_program::sysvar::slot_hashes::ID;
        let owner = solana_program::sysvar::ID;
        let mut lamports = 1u64;
        let info = AccountInfo::new(&key, false, false, &mut lamports, &mut data, &owner, false, 0);
        assert_eq!(recent_slot_hash(&info).unwrap(), [8u8; 32]);
    }

    #[test]
    fn empty_sysvar_is_rejected() {
        let data = sysvar_data(&[]);
        assert_eq!(
            most_recent_hash(&data).unwrap_err(),
            anchor_lang::error::Error::from(BingoError::EntropyUnavailable)
        );
        assert!(most_recent_hash(&[1, 2, 3]).is_err());
    }

    #[test]
    fn truncated_entry_is_rejected() {
        let mut data = sysvar_data(&[(11, [3u8; 32])]);
        data.truncate(30);
        assert!(most_recent_hash(&data).is_err());
    }

    #[test]
    fn draw_count_changes_the_number_stream() {
        let entropy = [7u8; 32];
        let numbers: Vec<u8> = (0..32).map(|n| draw_number(&entropy, 1, n)).collect();
        assert!(numbers.windows(2).any(|pair| pair[0] != pair[1]));
        assert_eq!(draw_number(&entropy, 1, 4), numbers[4]);
    }
}
