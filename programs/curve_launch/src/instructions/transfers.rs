use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};
use anchor_spl::token_interface::{transfer_checked, TransferChecked};

/// Moves lamports through the system program. `signer_seeds` is empty when
/// `from` signs the transaction itself. Zero amounts are skipped.
pub fn transfer_lamports<'info>(
    from: AccountInfo<'info>,
    to: AccountInfo<'info>,
    system_program: AccountInfo<'info>,
    amount: u64,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    let cpi_ctx = CpiContext::new_with_signer(system_program, Transfer { from, to }, signer_seeds);
    transfer(cpi_ctx, amount)
}

pub struct TokenMove<'info> {
    pub from: AccountInfo<'info>,
    pub to: AccountInfo<'info>,
    pub mint: AccountInfo<'info>,
    pub authority: AccountInfo<'info>,
    pub token_program: AccountInfo<'info>,
    pub decimals: u8,
}

pub fn transfer_tokens<'info>(
    accounts: TokenMove<'info>,
    amount: u64,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    let cpi_ctx = CpiContext::new_with_signer(
        accounts.token_program,
        TransferChecked {
            from: accounts.from,
            mint: accounts.mint,
            to: accounts.to,
            authority: accounts.authority,
        },
        signer_seeds,
    );
    transfer_checked(cpi_ctx, amount, accounts.decimals)
}
