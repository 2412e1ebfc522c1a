//! # 五行取名 Pallet 测试 Mock
//!
//! 本模块提供测试环境的 Mock Runtime 配置

use crate as pallet_divination_naming;
use frame_support::{
    derive_impl, parameter_types,
    traits::{ConstU32, ConstU64, Randomness},
};
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage,
};

type Block = frame_system::mocking::MockBlock<Test>;

// 构建 Mock Runtime
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        Timestamp: pallet_timestamp,
        Naming: pallet_divination_naming,
    }
);

/// 系统配置
#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type BaseCallFilter = frame_support::traits::Everything;
    type BlockWeights = ();
    type BlockLength = ();
    type DbWeight = ();
    type RuntimeOrigin = RuntimeOrigin;
    type RuntimeCall = RuntimeCall;
    type Nonce = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = u64;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
    type RuntimeEvent = RuntimeEvent;
    type BlockHashCount = ConstU64<250>;
    type Version = ();
    type PalletInfo = PalletInfo;
    type AccountData = ();
    type OnNewAccount = ();
    type OnKilledAccount = ();
    type SystemWeightInfo = ();
    type SS58Prefix = ();
    type OnSetCode = ();
    type MaxConsumers = ConstU32<16>;
}

// 时间戳配置
parameter_types! {
    pub const MinimumPeriod: u64 = 1000;
}

impl pallet_timestamp::Config for Test {
    type Moment = u64;
    type OnTimestampSet = ();
    type MinimumPeriod = MinimumPeriod;
    type WeightInfo = ();
}

/// 测试用随机数生成器
pub struct TestRandomness;

impl Randomness<H256, u64> for TestRandomness {
    fn random(subject: &[u8]) -> (H256, u64) {
        let block_number = frame_system::Pallet::<Test>::block_number();
        let hash = sp_io::hashing::blake2_256(subject);
        (H256::from(hash), block_number)
    }
}

/// 取名 Pallet 配置
///
/// 注：RuntimeEvent 关联类型已从 Polkadot SDK 2506 版本开始自动附加
impl pallet_divination_naming::Config for Test {
    type Randomness = TestRandomness;
    type WeightInfo = ();
    type MaxSingleCandidates = ConstU32<20>;
    type MaxPairCandidates = ConstU32<15>;
    type MaxCompoundCandidates = ConstU32<10>;
    type MaxResults = ConstU32<8>;
    type MinStrictMeaningMatches = ConstU32<10>;
}

/// 测试账户 ID
pub const ALICE: u64 = 1;
pub const BOB: u64 = 2;

/// 测试链上当前时间：2024-01-01 00:00:00 UTC
pub const GENESIS_MILLIS: u64 = 1_704_067_200_000;

/// 构建测试外部性
pub fn new_test_ext() -> sp_io::TestExternalities {
    let t = frame_system::GenesisConfig::<Test>::default()
        .build_storage()
        .unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| {
        System::set_block_number(1);
        Timestamp::set_timestamp(GENESIS_MILLIS);
    });
    ext
}
