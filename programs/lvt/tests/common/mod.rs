use anchor_lang::{AccountDeserialize, InstructionData, ToAccountMetas};
use solana_program_test::ProgramTest;
use solana_sdk::{
    account::Account,
    instruction::Instruction,
    program_option::COption,
    program_pack::Pack,
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    system_program,
    transaction::Transaction,
};

/// Adapt `lvt::entry` to the higher-ranked fn signature `processor!`
/// expects; the transmute only unifies the slice/account lifetimes.
pub fn lvt_entry(
    program_id: &Pubkey,
    accounts: &[anchor_lang::prelude::AccountInfo],
    data: &[u8],
) -> solana_sdk::entrypoint::ProgramResult {
    let accounts = unsafe {
        std::mem::transmute::<
            &[anchor_lang::prelude::AccountInfo<'_>],
            &[anchor_lang::prelude::AccountInfo<'_>],
        >(accounts)
    };
    lvt::entry(program_id, accounts, data)
}

/// Seed a valid SPL mint so mint accounts pass Anchor's `Account<Mint>`
/// checks without a separate setup transaction.
pub fn add_packed_mint(program_test: &mut ProgramTest, address: Pubkey, authority: Pubkey) {
    let mint = spl_token::state::Mint {
        mint_authority: COption::Some(authority),
        supply: 0,
        decimals: 9,
        is_initialized: true,
        freeze_authority: COption::None,
    };
    let mut data = vec![0u8; spl_token::state::Mint::LEN];
    spl_token::state::Mint::pack(mint, &mut data).unwrap();
    program_test.add_account(
        address,
        Account {
            lamports: 1_000_000_000,
            data,
            owner: spl_token::id(),
            executable: false,
            rent_epoch: 0,
        },
    );
}

/// Seed a valid SPL token account.
pub fn add_packed_token_account(
    program_test: &mut ProgramTest,
    address: Pubkey,
    mint: Pubkey,
    owner: Pubkey,
) {
    let token_account = spl_token::state::Account {
        mint,
        owner,
        amount: 0,
        delegate: COption::None,
        state: spl_token::state::AccountState::Initialized,
        is_native: COption::None,
        delegated_amount: 0,
        close_authority: COption::None,
    };
    let mut data = vec![0u8; spl_token::state::Account::LEN];
    spl_token::state::Account::pack(token_account, &mut data).unwrap();
    program_test.add_account(
        address,
        Account {
            lamports: 1_000_000_000,
            data,
            owner: spl_token::id(),
            executable: false,
            rent_epoch: 0,
        },
    );
}

/// Build the `initialize` instruction for a fresh state keypair.
pub fn initialize_ix(
    program_id: Pubkey,
    state: Pubkey,
    treasury: Pubkey,
    admin: Pubkey,
    lvt_mint: Pubkey,
) -> Instruction {
    Instruction {
        program_id,
        accounts: lvt::accounts::Initialize {
            state,
            treasury,
            admin,
            lvt_mint,
            system_program: system_program::id(),
            token_program: spl_token::id(),
        }
        .to_account_metas(None),
        data: lvt::instruction::Initialize {}.data(),
    }
}

/// Fetch and deserialize a program-owned account.
pub async fn fetch_account<T: AccountDeserialize>(
    context: &mut solana_program_test::ProgramTestContext,
    address: Pubkey,
) -> T {
    let account = context
        .banks_client
        .get_account(address)
        .await
        .unwrap()
        .expect("account must exist");
    T::try_deserialize(&mut account.data.as_slice()).unwrap()
}

/// Sign and submit a single-instruction transaction.
pub async fn send_tx(
    context: &mut solana_program_test::ProgramTestContext,
    ix: Instruction,
    extra_signers: &[&Keypair],
) -> Result<(), solana_program_test::BanksClientError> {
    let payer = context.payer.pubkey();
    // A fresh blockhash keeps repeated identical instructions from being
    // deduplicated by the status cache (which would replay the cached
    // result instead of executing the transaction).
    let blockhash = context.get_new_latest_blockhash().await?;
    let mut signers: Vec<&Keypair> = vec![&context.payer];
    signers.extend_from_slice(extra_signers);
    let tx = Transaction::new_signed_with_payer(&[ix], Some(&payer), &signers, blockhash);
    context.banks_client.process_transaction(tx).await
}
