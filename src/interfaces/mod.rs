//! Typed bindings for the externally-defined contracts a run talks to.
//! Each interface carries only the entry points this pipeline exercises.

use alloy::sol;

sol! {
    /// Minimal fungible-token surface: the approval the router needs, plus
    /// the balance and metadata reads used by the pipeline and the
    /// inspection binaries.
    #[sol(rpc)]
    interface IERC20 {
        function approve(address spender, uint256 amount) external returns (bool);
        function allowance(address owner, address spender) external view returns (uint256);
        function balanceOf(address account) external view returns (uint256);
        function decimals() external view returns (uint8);
        function symbol() external view returns (string memory);
    }

    #[sol(rpc)]
    interface IUniswapV3Factory {
        function getPool(address tokenA, address tokenB, uint24 fee) external view returns (address pool);
    }

    #[sol(rpc)]
    interface IUniswapV3Pool {
        function token0() external view returns (address);
        function token1() external view returns (address);
        function fee() external view returns (uint24);
    }

    /// SwapRouter02 single-hop entry point. The params layout carries no
    /// deadline field.
    #[sol(rpc)]
    interface ISwapRouter {
        struct ExactInputSingleParams {
            address tokenIn;
            address tokenOut;
            uint24 fee;
            address recipient;
            uint256 amountIn;
            uint256 amountOutMinimum;
            uint160 sqrtPriceLimitX96;
        }

        function exactInputSingle(ExactInputSingleParams calldata params) external payable returns (uint256 amountOut);
    }

    /// Aave lending pool deposit entry point.
    #[sol(rpc)]
    interface IAavePool {
        function deposit(address asset, uint256 amount, address onBehalfOf, uint16 referralCode) external;
    }
}
