//! Property-based tests for the allocation pipeline's division guards and
//! distribution invariants. The pipeline is total: any well-typed input
//! must produce numeric results without panicking.

use proptest::prelude::*;
use rust_decimal::Decimal;

use settlement_engine::calculation::{
    calculate_cost_basis, distribute_rewards, working_days,
};
use settlement_engine::config::{HolidayCalendar, SettlementPolicy};
use settlement_engine::models::{Member, MemberPerformance, OpexRecord, YearMonth};

fn member(id: usize, annual_salary: i64, is_costed: bool) -> Member {
    Member {
        id: format!("mem_{:03}", id),
        name: format!("Member {}", id),
        annual_salary: Decimal::from(annual_salary),
        is_active: is_costed,
        is_approved: true,
    }
}

fn performance(id: usize, efficiency_rate: Decimal) -> MemberPerformance {
    MemberPerformance {
        member_id: format!("mem_{:03}", id),
        daily_total_cost: Decimal::ZERO,
        planned_days: Decimal::ZERO,
        actual_days: Decimal::ZERO,
        saved_days: Decimal::ZERO,
        efficiency_rate,
        planned_investment: Decimal::ZERO,
        actual_investment: Decimal::ZERO,
        saved_cost: Decimal::ZERO,
    }
}

proptest! {
    /// The cost basis is always finite, component-consistent, and zero-guarded.
    #[test]
    fn cost_basis_total_is_sum_of_components(
        salaries in proptest::collection::vec((0i64..200_000_000, any::<bool>()), 0..8),
        target_salary in 0i64..200_000_000,
        opex_amount in 0i64..100_000_000,
        month_num in 1u32..=12,
    ) {
        let mut roster: Vec<Member> = salaries
            .iter()
            .enumerate()
            .map(|(i, (salary, costed))| member(i, *salary, *costed))
            .collect();
        let target = member(999, target_salary, true);
        roster.push(target.clone());

        let month = YearMonth::new(2026, month_num).unwrap();
        let opex = vec![OpexRecord { year_month: month, amount: Decimal::from(opex_amount) }];

        let basis = calculate_cost_basis(
            &roster,
            &target,
            month,
            &opex,
            &HolidayCalendar::default(),
            &SettlementPolicy::default(),
        );

        prop_assert_eq!(
            basis.daily_total_cost,
            basis.daily_salary_cost + basis.daily_overhead_cost
        );
        prop_assert!(!basis.daily_salary_cost.is_sign_negative());
        prop_assert!(!basis.daily_overhead_cost.is_sign_negative());
    }

    /// A roster whose costed salaries sum to zero allocates no overhead.
    #[test]
    fn zero_salary_roster_allocates_no_overhead(
        roster_size in 0usize..6,
        opex_amount in 0i64..100_000_000,
    ) {
        let roster: Vec<Member> = (0..roster_size).map(|i| member(i, 0, true)).collect();
        let target = member(0, 0, true);
        let month = YearMonth::new(2026, 2).unwrap();
        let opex = vec![OpexRecord { year_month: month, amount: Decimal::from(opex_amount) }];

        let basis = calculate_cost_basis(
            &roster,
            &target,
            month,
            &opex,
            &HolidayCalendar::default(),
            &SettlementPolicy::default(),
        );

        prop_assert_eq!(basis.daily_overhead_cost, Decimal::ZERO);
        prop_assert_eq!(basis.daily_salary_cost, Decimal::ZERO);
    }

    /// With no holidays, every month has between 20 and 23 working days.
    #[test]
    fn working_days_stay_in_range(year in 2000i32..2100, month_num in 1u32..=12) {
        let month = YearMonth::new(year, month_num).unwrap();
        let days = working_days(month, &HolidayCalendar::default());
        prop_assert!((20..=23).contains(&days));
    }

    /// No reward is ever negative, and a non-positive diff pays nobody.
    #[test]
    fn rewards_are_never_negative(
        diff in -50_000_000i64..50_000_000,
        company_share in 0i64..=100,
        efficiencies in proptest::collection::vec(-100i64..=100, 0..8),
    ) {
        let performances: Vec<MemberPerformance> = efficiencies
            .iter()
            .enumerate()
            .map(|(i, e)| performance(i, Decimal::from(*e)))
            .collect();

        let distribution = distribute_rewards(
            Decimal::from(diff),
            Decimal::from(company_share),
            &performances,
        );

        prop_assert!(!distribution.company_share.is_sign_negative());
        prop_assert!(!distribution.team_share.is_sign_negative());
        for reward in &distribution.rewards {
            prop_assert!(!reward.share_amount.is_sign_negative());
            prop_assert!(!reward.share_percent.is_sign_negative());
        }

        if diff <= 0 {
            prop_assert!(distribution.rewards.iter().all(|r| r.share_amount.is_zero()));
        }
    }

    /// Distributed rewards sum to the team pool within one unit per
    /// eligible member (independent per-member rounding).
    #[test]
    fn reward_sum_stays_within_rounding_tolerance(
        diff in 1i64..50_000_000,
        company_share in 0i64..=100,
        efficiencies in proptest::collection::vec(1i64..=500, 1..8),
    ) {
        let performances: Vec<MemberPerformance> = efficiencies
            .iter()
            .enumerate()
            .map(|(i, e)| performance(i, Decimal::from(*e)))
            .collect();

        let distribution = distribute_rewards(
            Decimal::from(diff),
            Decimal::from(company_share),
            &performances,
        );

        let distributed: Decimal = distribution.rewards.iter().map(|r| r.share_amount).sum();
        let tolerance = Decimal::from(performances.len() as i64);
        prop_assert!((distributed - distribution.team_share).abs() <= tolerance);
    }
}
