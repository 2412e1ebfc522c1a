//! # Divination Naming Pallet Benchmarking
//!
//! 五行取名模块基准测试

#![cfg(feature = "runtime-benchmarks")]

use super::*;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;
use pallet::*;

#[benchmarks]
mod benchmarks {
    use super::*;

    /// 复姓四字全名，无寓意偏好
    #[benchmark]
    fn generate_names() {
        let caller: T::AccountId = whitelisted_caller();
        let request = NameRequest::new("欧阳", Gender::Female, GivenLength::Compound)
            .map(|r| r.with_birth_date(BirthDate::new(1996, 7, 21).with_hour(6)))
            .expect("surname fits the bound");

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), request);
    }

    impl_benchmark_test_suite!(Pallet, crate::mock::new_test_ext(), crate::mock::Test);
}
