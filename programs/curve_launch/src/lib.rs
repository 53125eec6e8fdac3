/*
   ___ _   _ ___ _   _ ___   _      _  _   _ _  _  ___ _  _
  / __| | | | _ \ | | | __| | |    /_\| | | | \| |/ __| || |
 | (__| |_| |   / |_| | _|  | |__ / _ \ |_| | .` | (__| __ |
  \___|\___/|_|_\\___/|___| |____/_/ \_\___/|_|\_|\___|_||_|

  Bonding curve token launches with an anti-bot gate

  💹 Price
   ^                                   |  complete
   |                                 / |  -> withdraw
   |                              /    |
   |                          /        |
   |                    __/            |
   |____________----                   |
   +-----------------------------------+--> Quote raised
                              completion threshold

 🔹 Constant product pricing over virtual + real reserves
 🔹 Every trade co-signed by an off-chain secp256k1 authority
 🔹 Waiting room: wallet limits, participant cap, trade history gate
 🔹 Sell tax schedules: flat, higher-sell and decaying
 🔹 Referral rewards paid out of the trading fee

 🚀 Create → 🚪 Waiting room → 📈 Trade → 🎓 Complete → 💰 Withdraw
*/

use anchor_lang::prelude::*;

pub mod address;
pub mod constants;
pub mod curve;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod lifecycle;
pub mod referral;
pub mod signature;
pub mod state;
pub mod tax;
pub mod waiting_room;

use instructions::*;

declare_id!("GFE1uD3N6KNyAbxDpQEKXEys54ajAAGKw7wSLRuXVYYs");

#[program]
pub mod curve_launch {
    use super::*;

    pub fn init_config(ctx: Context<InitConfig>, verify_signer: Pubkey) -> Result<()> {
        ctx.accounts.init_config(verify_signer, ctx.bumps)
    }

    pub fn update_config(ctx: Context<UpdateConfig>, input: UpdateConfigInput) -> Result<()> {
        ctx.accounts.update_config(input)
    }

    pub fn update_sol_price(ctx: Context<UpdateConfig>, sol_price: u64) -> Result<()> {
        ctx.accounts.update_sol_price(sol_price)
    }

    pub fn create_pool(ctx: Context<CreatePool>, input: CreatePoolInput) -> Result<()> {
        ctx.accounts.create_pool(input, ctx.bumps)
    }

    pub fn buy(ctx: Context<Buy>, input: BuyInput) -> Result<()> {
        ctx.accounts.buy(input, ctx.bumps)
    }

    pub fn sell(ctx: Context<Sell>, input: SellInput) -> Result<()> {
        ctx.accounts.sell(input, ctx.bumps)
    }

    pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
        ctx.accounts.withdraw()
    }
}
