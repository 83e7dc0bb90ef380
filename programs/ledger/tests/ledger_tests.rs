//! Integration Tests for the Token Ledger
//!
//! These tests drive the ledger the way a host would: account
//! identities come from real keypairs, mutations arrive either as
//! direct calls or as packed instructions, and concurrent callers go
//! through `SharedLedger`.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p token_ledger
//! ```

use solana_program::{program_error::ProgramError, pubkey::Pubkey};
use solana_sdk::signature::{Keypair, Signer};
use token_ledger::{
    BalanceShortfall, Ledger, LedgerError, LedgerInstruction, Processor, SharedLedger,
};

// =============================================================================
// TEST SETUP HELPERS
// =============================================================================

const INITIAL_SUPPLY: u64 = 5_000_000;

/// Deploy the reference token with `owner` as the constructing caller
fn deploy(owner: &Keypair) -> Ledger {
    Ledger::new(owner.pubkey(), INITIAL_SUPPLY, "Bucks Bunny", "BKB", 8)
}

/// Pack and process one instruction on behalf of `caller`
fn send(ledger: &mut Ledger, caller: &Keypair, ix: LedgerInstruction) -> Result<(), ProgramError> {
    Processor::process(ledger, &caller.pubkey(), &ix.pack())
}

/// Fresh ledger owned by the same key, for comparing against untouched state
fn deploy_with_same_owner(ledger: &Ledger) -> Ledger {
    Ledger::new(*ledger.owner(), INITIAL_SUPPLY, "Bucks Bunny", "BKB", 8)
}

fn sum_of_balances(ledger: &Ledger) -> u64 {
    ledger.holders().map(|(_, amount)| amount).sum()
}

// =============================================================================
// CONSTRUCTION
// =============================================================================

#[test]
fn test_construction() {
    let owner = Keypair::new();
    let ledger = deploy(&owner);

    assert_eq!(ledger.name(), "Bucks Bunny");
    assert_eq!(ledger.symbol(), "BKB");
    assert_eq!(ledger.decimals(), 8);
    assert_eq!(ledger.total_supply(), 5_000_000);
    assert_eq!(ledger.balance_of(&owner.pubkey()), 5_000_000);
    assert_eq!(ledger.metadata().format_amount(ledger.total_supply()), "0.05");
}

#[test]
fn test_construction_through_instruction() {
    let owner = Keypair::new();
    let data = LedgerInstruction::Initialize {
        initial_supply: INITIAL_SUPPLY,
        decimals: 8,
        name: "Bucks Bunny".to_string(),
        symbol: "BKB".to_string(),
    }
    .pack();

    let ledger = Processor::initialize(&owner.pubkey(), &data).unwrap();

    assert_eq!(ledger, deploy(&owner));
}

// =============================================================================
// TRANSFER
// =============================================================================

#[test]
fn test_simple_transfer() {
    let owner = Keypair::new();
    let account_b = Keypair::new();
    let mut ledger = deploy(&owner);

    ledger.transfer(&owner.pubkey(), &account_b.pubkey(), 20).unwrap();

    assert_eq!(ledger.balance_of(&owner.pubkey()), 4_999_980);
    assert_eq!(ledger.balance_of(&account_b.pubkey()), 20);
    assert_eq!(ledger.total_supply(), INITIAL_SUPPLY);
}

#[test]
fn test_transfer_conserves_supply() {
    let owner = Keypair::new();
    let a = Keypair::new();
    let b = Keypair::new();
    let mut ledger = deploy(&owner);
    ledger.transfer(&owner.pubkey(), &a.pubkey(), 1_000).unwrap();

    for amount in [0u64, 1, 250, 749] {
        let a_before = ledger.balance_of(&a.pubkey());
        let b_before = ledger.balance_of(&b.pubkey());

        ledger.transfer(&a.pubkey(), &b.pubkey(), amount).unwrap();

        assert_eq!(ledger.balance_of(&a.pubkey()), a_before - amount);
        assert_eq!(ledger.balance_of(&b.pubkey()), b_before + amount);
        assert_eq!(ledger.total_supply(), INITIAL_SUPPLY);
        assert_eq!(sum_of_balances(&ledger), INITIAL_SUPPLY);
    }
}

#[test]
fn test_transfer_more_than_balance_fails() {
    let owner = Keypair::new();
    let a = Keypair::new();
    let mut ledger = deploy(&owner);
    ledger.transfer(&owner.pubkey(), &a.pubkey(), 10).unwrap();
    let before = ledger.clone();

    let err = ledger
        .transfer(&a.pubkey(), &owner.pubkey(), 11)
        .unwrap_err();

    assert_eq!(err, LedgerError::InsufficientBalance(BalanceShortfall::Transfer));
    assert_eq!(err.to_string(), "value higher than balance");
    assert_eq!(ledger, before);
}

// =============================================================================
// APPROVE / TRANSFER FROM
// =============================================================================

#[test]
fn test_approve_is_idempotent() {
    let owner = Keypair::new();
    let spender = Keypair::new();
    let mut ledger = deploy(&owner);

    ledger.approve(&owner.pubkey(), &spender.pubkey(), 77).unwrap();
    ledger.approve(&owner.pubkey(), &spender.pubkey(), 77).unwrap();

    assert_eq!(ledger.allowance(&owner.pubkey(), &spender.pubkey()), 77);
}

#[test]
fn test_delegated_transfer() {
    let owner = Keypair::new();
    let payer = Keypair::new();
    let spender = Keypair::new();
    let recipient = Keypair::new();
    let mut ledger = deploy(&owner);

    ledger.transfer(&owner.pubkey(), &payer.pubkey(), 10).unwrap();
    ledger.approve(&payer.pubkey(), &spender.pubkey(), 10).unwrap();
    ledger
        .transfer_from(&spender.pubkey(), &payer.pubkey(), &recipient.pubkey(), 10)
        .unwrap();

    assert_eq!(ledger.balance_of(&payer.pubkey()), 0);
    assert_eq!(ledger.balance_of(&recipient.pubkey()), 10);
    assert_eq!(ledger.allowance(&payer.pubkey(), &spender.pubkey()), 0);
    assert!(ledger.check_invariants().is_ok());
}

#[test]
fn test_allowance_decrements_by_spent_amount() {
    let owner = Keypair::new();
    let spender = Keypair::new();
    let recipient = Keypair::new();
    let mut ledger = deploy(&owner);
    ledger.approve(&owner.pubkey(), &spender.pubkey(), 100).unwrap();

    ledger
        .transfer_from(&spender.pubkey(), &owner.pubkey(), &recipient.pubkey(), 60)
        .unwrap();
    assert_eq!(ledger.allowance(&owner.pubkey(), &spender.pubkey()), 40);

    // Spend exactly the remainder
    ledger
        .transfer_from(&spender.pubkey(), &owner.pubkey(), &recipient.pubkey(), 40)
        .unwrap();
    assert_eq!(ledger.allowance(&owner.pubkey(), &spender.pubkey()), 0);
    assert_eq!(ledger.balance_of(&recipient.pubkey()), 100);
}

#[test]
fn test_rejected_overspend_without_approval() {
    let owner = Keypair::new();
    let payer = Keypair::new();
    let spender = Keypair::new();
    let recipient = Keypair::new();
    let mut ledger = deploy(&owner);
    ledger.transfer(&owner.pubkey(), &payer.pubkey(), 10).unwrap();
    let before = ledger.clone();

    // Balance would suffice, allowance does not
    let err = ledger
        .transfer_from(&spender.pubkey(), &payer.pubkey(), &recipient.pubkey(), 10)
        .unwrap_err();

    assert_eq!(err, LedgerError::InsufficientAllowance);
    assert_eq!(err.to_string(), "not enough allowance");
    assert_eq!(ledger, before);
}

#[test]
fn test_allowance_error_wins_over_balance_error() {
    let owner = Keypair::new();
    let payer = Keypair::new();
    let spender = Keypair::new();
    let mut ledger = deploy(&owner);
    ledger.transfer(&owner.pubkey(), &payer.pubkey(), 5).unwrap();
    ledger.approve(&payer.pubkey(), &spender.pubkey(), 3).unwrap();

    assert_eq!(
        ledger.transfer_from(&spender.pubkey(), &payer.pubkey(), &spender.pubkey(), 8),
        Err(LedgerError::InsufficientAllowance)
    );

    // With enough allowance the balance check is what fails
    ledger.approve(&payer.pubkey(), &spender.pubkey(), 8).unwrap();
    let err = ledger
        .transfer_from(&spender.pubkey(), &payer.pubkey(), &spender.pubkey(), 8)
        .unwrap_err();
    assert_eq!(err.to_string(), "not enough balance");
    assert_eq!(ledger.allowance(&payer.pubkey(), &spender.pubkey()), 8);
}

// =============================================================================
// MINT / BURN
// =============================================================================

#[test]
fn test_owner_mint_and_burn() {
    let owner = Keypair::new();
    let holder = Keypair::new();
    let mut ledger = deploy(&owner);

    ledger.mint(&owner.pubkey(), &holder.pubkey(), 1_000).unwrap();
    assert_eq!(ledger.total_supply(), INITIAL_SUPPLY + 1_000);
    assert_eq!(ledger.balance_of(&holder.pubkey()), 1_000);

    ledger.burn(&owner.pubkey(), &holder.pubkey(), 400).unwrap();
    assert_eq!(ledger.total_supply(), INITIAL_SUPPLY + 600);
    assert_eq!(ledger.balance_of(&holder.pubkey()), 600);
    assert_eq!(sum_of_balances(&ledger), ledger.total_supply());
}

#[test]
fn test_mint_and_burn_require_owner() {
    let owner = Keypair::new();
    let intruder = Keypair::new();
    let mut ledger = deploy(&owner);
    ledger.transfer(&owner.pubkey(), &intruder.pubkey(), 100).unwrap();
    let before = ledger.clone();

    let mint_err = ledger
        .mint(&intruder.pubkey(), &intruder.pubkey(), 1)
        .unwrap_err();
    let burn_err = ledger
        .burn(&intruder.pubkey(), &owner.pubkey(), 1)
        .unwrap_err();

    assert_eq!(mint_err, LedgerError::AccessDenied);
    assert_eq!(burn_err, LedgerError::AccessDenied);
    assert_eq!(mint_err.to_string(), "Access denied, only owner");
    assert_eq!(ledger, before);
}

#[test]
fn test_burn_more_than_balance_fails() {
    let owner = Keypair::new();
    let holder = Keypair::new();
    let mut ledger = deploy(&owner);

    let err = ledger
        .burn(&owner.pubkey(), &holder.pubkey(), 1)
        .unwrap_err();

    assert_eq!(err, LedgerError::InsufficientBalance(BalanceShortfall::Burn));
    assert_eq!(err.to_string(), "amount lower than existent");
    assert_eq!(ledger.total_supply(), INITIAL_SUPPLY);
}

#[test]
fn test_mint_overflow_is_rejected() {
    let owner = Keypair::new();
    let mut ledger = deploy(&owner);

    assert_eq!(
        ledger.mint(&owner.pubkey(), &owner.pubkey(), u64::MAX),
        Err(LedgerError::Overflow)
    );
    assert_eq!(ledger.total_supply(), INITIAL_SUPPLY);
}

// =============================================================================
// PACKED INSTRUCTIONS
// =============================================================================

#[test]
fn test_instruction_flow_matches_direct_calls() {
    let owner = Keypair::new();
    let payer = Keypair::new();
    let spender = Keypair::new();
    let recipient = Keypair::new();

    let mut direct = deploy(&owner);
    direct.transfer(&owner.pubkey(), &payer.pubkey(), 100).unwrap();
    direct.approve(&payer.pubkey(), &spender.pubkey(), 30).unwrap();
    direct.increase_allowance(&payer.pubkey(), &spender.pubkey(), 20).unwrap();
    direct
        .transfer_from(&spender.pubkey(), &payer.pubkey(), &recipient.pubkey(), 45)
        .unwrap();
    direct.decrease_allowance(&payer.pubkey(), &spender.pubkey(), 5).unwrap();
    direct.mint(&owner.pubkey(), &recipient.pubkey(), 7).unwrap();
    direct.burn(&owner.pubkey(), &payer.pubkey(), 5).unwrap();

    let mut packed = deploy(&owner);
    send(&mut packed, &owner, LedgerInstruction::Transfer { recipient: payer.pubkey(), amount: 100 }).unwrap();
    send(&mut packed, &payer, LedgerInstruction::Approve { spender: spender.pubkey(), amount: 30 }).unwrap();
    send(&mut packed, &payer, LedgerInstruction::IncreaseAllowance { spender: spender.pubkey(), amount: 20 }).unwrap();
    send(
        &mut packed,
        &spender,
        LedgerInstruction::TransferFrom {
            payer: payer.pubkey(),
            recipient: recipient.pubkey(),
            amount: 45,
        },
    )
    .unwrap();
    send(&mut packed, &payer, LedgerInstruction::DecreaseAllowance { spender: spender.pubkey(), amount: 5 }).unwrap();
    send(&mut packed, &owner, LedgerInstruction::MintTo { recipient: recipient.pubkey(), amount: 7 }).unwrap();
    send(&mut packed, &owner, LedgerInstruction::Burn { account: payer.pubkey(), amount: 5 }).unwrap();

    assert_eq!(packed, direct);
    assert_eq!(packed.allowance(&payer.pubkey(), &spender.pubkey()), 0);
    assert_eq!(packed.balance_of(&payer.pubkey()), 50);
    assert_eq!(packed.balance_of(&recipient.pubkey()), 52);
    assert!(packed.check_invariants().is_ok());
}

#[test]
fn test_instruction_errors_map_to_custom_codes() {
    let owner = Keypair::new();
    let stranger = Keypair::new();
    let mut ledger = deploy(&owner);

    let transfer = LedgerInstruction::Transfer { recipient: owner.pubkey(), amount: 1 };
    let spend = LedgerInstruction::TransferFrom {
        payer: owner.pubkey(),
        recipient: stranger.pubkey(),
        amount: 1,
    };
    let mint = LedgerInstruction::MintTo { recipient: stranger.pubkey(), amount: 1 };

    assert_eq!(send(&mut ledger, &stranger, transfer), Err(ProgramError::Custom(0)));
    assert_eq!(send(&mut ledger, &stranger, spend), Err(ProgramError::Custom(1)));
    assert_eq!(send(&mut ledger, &stranger, mint), Err(ProgramError::Custom(2)));
    assert_eq!(ledger, deploy_with_same_owner(&ledger));
}

#[test]
fn test_revoke_through_instruction() {
    let owner = Keypair::new();
    let spender = Keypair::new();
    let mut ledger = deploy(&owner);

    send(&mut ledger, &owner, LedgerInstruction::Approve { spender: spender.pubkey(), amount: 9 }).unwrap();
    send(&mut ledger, &owner, LedgerInstruction::Revoke { spender: spender.pubkey() }).unwrap();

    assert_eq!(ledger.allowance(&owner.pubkey(), &spender.pubkey()), 0);
}

// =============================================================================
// CONCURRENCY
// =============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_transfers_conserve_supply() {
    let owner = Keypair::new();
    let shared = SharedLedger::new(deploy(&owner));
    let accounts: Vec<Pubkey> = (0..8).map(|_| Keypair::new().pubkey()).collect();

    // Seed every account
    for account in &accounts {
        shared.transfer(&owner.pubkey(), account, 1_000).unwrap();
    }

    let mut tasks = Vec::new();
    for (i, from) in accounts.iter().copied().enumerate() {
        let to = accounts[(i + 1) % accounts.len()];
        let shared = shared.clone();
        tasks.push(tokio::spawn(async move {
            for _ in 0..100 {
                // Failures are fine; partial effects are not
                let _ = shared.transfer(&from, &to, 37);
            }
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }

    let ledger = shared.snapshot();
    assert_eq!(ledger.total_supply(), INITIAL_SUPPLY);
    assert_eq!(sum_of_balances(&ledger), INITIAL_SUPPLY);
    assert!(ledger.check_invariants().is_ok());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_packed_spends_respect_allowance() {
    let owner = Keypair::new();
    let spender = Keypair::new();
    let recipient = Keypair::new();
    let shared = SharedLedger::new(deploy(&owner));
    shared.approve(&owner.pubkey(), &spender.pubkey(), 250).unwrap();

    let data = LedgerInstruction::TransferFrom {
        payer: owner.pubkey(),
        recipient: recipient.pubkey(),
        amount: 10,
    }
    .pack();

    let mut tasks = Vec::new();
    for _ in 0..40 {
        let shared = shared.clone();
        let data = data.clone();
        let caller = spender.pubkey();
        tasks.push(tokio::spawn(async move { shared.process(&caller, &data) }));
    }

    let mut succeeded = 0;
    for task in tasks {
        if task.await.unwrap().is_ok() {
            succeeded += 1;
        }
    }

    assert_eq!(succeeded, 25);
    assert_eq!(shared.balance_of(&recipient.pubkey()), 250);
    assert_eq!(shared.allowance(&owner.pubkey(), &spender.pubkey()), 0);
    assert_eq!(shared.total_supply(), INITIAL_SUPPLY);
}
